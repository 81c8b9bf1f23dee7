mod payload;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use payload::decode_session_cookie;
pub use resolver::{is_identified, resolve_identity, resolve_user_id, try_resolve_identity};
