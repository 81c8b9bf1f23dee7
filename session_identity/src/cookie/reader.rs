use super::source::CookieSource;

/// Look up a cookie's raw value by exact, case-sensitive name.
///
/// Entries are split on `;` and leading spaces are skipped. The value is
/// everything after `name=`, returned as stored: no URL decoding and no
/// trimming. When the name appears more than once the first entry wins.
pub fn lookup<S>(store: &S, name: &str) -> Option<String>
where
    S: CookieSource + ?Sized,
{
    if name.is_empty() {
        return None;
    }

    let header = store.cookie_header()?;

    header
        .split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| {
            entry
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
}
