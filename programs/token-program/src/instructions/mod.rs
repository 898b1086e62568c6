pub mod burn;
pub mod burn_from;
pub mod create_token;
pub mod initialize;
pub mod maintainers;
pub mod mint;
pub mod whitelist;

pub use burn::*;
pub use burn_from::*;
pub use create_token::*;
pub use initialize::*;
pub use maintainers::*;
pub use mint::*;
pub use whitelist::*;
