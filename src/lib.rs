pub mod analyzers;
pub mod clock;
pub mod config;
pub mod ledger;
pub mod output;
pub mod parser;
pub mod record;
