use std::env;
use std::path::PathBuf;

/// Platform default cleanup roots: the OS temp directory followed by the
/// per-user cache directory, deduplicated with order preserved.
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![env::temp_dir()];
    if let Some(cache) = dirs::cache_dir()
        && !locations.contains(&cache)
    {
        locations.push(cache);
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_with_temp_dir_and_have_no_duplicates() {
        let locations = default_locations();
        assert_eq!(locations[0], env::temp_dir());
        for (i, a) in locations.iter().enumerate() {
            assert!(!locations[i + 1..].contains(a));
        }
    }
}
