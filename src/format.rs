use std::fmt::Display;

/// Substitutes `args`, in order, for `%s`/`%d`/`%i`/`%f` placeholders in
/// `template`. `%%` yields a literal `%`. A placeholder with no remaining
/// argument, and any unrecognized `%` sequence, passes through unchanged;
/// arguments beyond the placeholders are ignored.
pub fn sprintf(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&conv) if is_conversion(conv) && next_arg < args.len() => {
                chars.next();
                out.push_str(&args[next_arg].to_string());
                next_arg += 1;
            }
            _ => out.push('%'),
        }
    }
    out
}

fn is_conversion(c: char) -> bool {
    matches!(c, 's' | 'd' | 'i' | 'f')
}

/// Builds an error carrying `sprintf(template, args)` as its message.
/// Returns the error rather than raising it.
pub fn format_error(template: &str, args: &[&dyn Display]) -> anyhow::Error {
    anyhow::Error::msg(sprintf(template, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprintf_single_placeholder() {
        assert_eq!(sprintf("count=%s", &[&5]), "count=5");
    }

    #[test]
    fn test_sprintf_multiple_placeholders() {
        assert_eq!(
            sprintf("parameter '%s' has no value for key '%s'", &[&"obj", &"a"]),
            "parameter 'obj' has no value for key 'a'"
        );
    }

    #[test]
    fn test_sprintf_numeric_conversions() {
        assert_eq!(sprintf("%d items, %f total", &[&3, &1.5]), "3 items, 1.5 total");
        assert_eq!(sprintf("%i", &[&-7]), "-7");
    }

    #[test]
    fn test_sprintf_percent_escape() {
        assert_eq!(sprintf("100%% of %s", &[&"it"]), "100% of it");
    }

    #[test]
    fn test_sprintf_unrecognized_sequence_passes_through() {
        assert_eq!(sprintf("%q %s", &[&"x"]), "%q x");
    }

    #[test]
    fn test_sprintf_missing_arg_passes_through() {
        assert_eq!(sprintf("%s and %s", &[&"one"]), "one and %s");
        assert_eq!(sprintf("%s", &[]), "%s");
    }

    #[test]
    fn test_sprintf_extra_args_ignored() {
        assert_eq!(sprintf("%s", &[&"a", &"b"]), "a");
    }

    #[test]
    fn test_sprintf_trailing_percent() {
        assert_eq!(sprintf("50%", &[]), "50%");
    }

    #[test]
    fn test_format_error_message() {
        let err = format_error("count=%s", &[&5]);
        assert_eq!(err.to_string(), "count=5");
    }
}
