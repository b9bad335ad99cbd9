/// Joins a group prefix with a route or group suffix.
///
/// The result never contains a doubled separator at the seam. An empty
/// prefix roots the suffix at `/`; an empty suffix returns the prefix as is.
pub fn join(prefix: &str, suffix: &str) -> String {
    let left = prefix.trim_end_matches('/');
    let right = suffix.trim_start_matches('/');
    if left.is_empty() {
        format!("/{right}")
    } else if right.is_empty() {
        left.to_string()
    } else {
        format!("{left}/{right}")
    }
}

#[cfg(test)]
mod tests {
    use super::join;

    #[test]
    fn joins_with_single_separator() {
        assert_eq!(join("/v1", "/users"), "/v1/users");
        assert_eq!(join("/v1/", "users"), "/v1/users");
        assert_eq!(join("/v1///", "///users"), "/v1/users");
        assert_eq!(join("v1", "users"), "v1/users");
    }

    #[test]
    fn empty_sides() {
        assert_eq!(join("", ""), "/");
        assert_eq!(join("", "login"), "/login");
        assert_eq!(join("/", "/login"), "/login");
        assert_eq!(join("/v1", ""), "/v1");
        assert_eq!(join("/v1", "/"), "/v1");
    }

    #[test]
    fn joining_empty_suffix_is_idempotent() {
        let once = join("/api", "/v2");
        assert_eq!(join(&once, ""), once);
        assert_eq!(join(&join(&once, ""), ""), once);
    }

    #[test]
    fn repeated_composition_is_associative() {
        let samples = ["", "/", "a", "/a", "a/", "/a/", "//b//", "c/d"];
        for a in samples {
            for b in samples {
                for c in samples {
                    assert_eq!(
                        join(&join(a, b), c),
                        join(a, &join(b, c)),
                        "a={a:?} b={b:?} c={c:?}"
                    );
                }
            }
        }
    }
}
