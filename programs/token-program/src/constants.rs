pub const MAINTAINERS_TAG: &[u8] = b"maintainers";
pub const WHITELIST_TAG: &[u8] = b"whitelist";
pub const CONFIG_TAG: &[u8] = b"config";
pub const MINT_TAG: &[u8] = b"mint";

/// Token names are used verbatim as a PDA seed, so they share the seed limit.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

pub const MAX_SUB_ADMINS: usize = 10;
pub const MAX_WHITELISTED_USERS: usize = 50;
