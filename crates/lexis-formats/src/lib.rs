pub mod loader;
pub mod loaders;

pub use loader::SourceLoader;
pub use loaders::{Arrow, Block, BracketInline, SlashInline, WordList, parser_for};
