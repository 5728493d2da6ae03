//! Runtime message templates
//!
//! Templates use `{}` for the next positional argument and `{N}` for the
//! argument at index `N`. `{{` and `}}` produce literal braces. Placeholders
//! without a matching argument are kept verbatim and surplus arguments are
//! ignored, so a malformed call site still produces a readable line.
//!
//! Rendering goes straight into the destination formatter: arguments are only
//! formatted when the [`Rendered`] value itself is displayed.

use std::fmt::{self, Display, Write};

/// A borrowed message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Bind arguments without formatting anything yet
    pub fn with_args<'b>(&self, args: &'b [&'b dyn Display]) -> Rendered<'b>
    where
        'a: 'b,
    {
        Rendered {
            source: self.source,
            args,
        }
    }

    /// Render into an owned string
    pub fn render(&self, args: &[&dyn Display]) -> String {
        self.with_args(args).to_string()
    }
}

/// A template paired with its arguments, formatted on display.
pub struct Rendered<'a> {
    source: &'a str,
    args: &'a [&'a dyn Display],
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next = 0usize;
        let mut rest = self.source;

        while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
            f.write_str(&rest[..pos])?;
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                f.write_char('{')?;
                rest = &tail[2..];
                continue;
            }
            if tail.starts_with('}') {
                f.write_char('}')?;
                rest = if tail.starts_with("}}") { &tail[2..] } else { &tail[1..] };
                continue;
            }

            let Some(end) = tail[1..].find('}') else {
                // unterminated placeholder
                f.write_str(tail)?;
                return Ok(());
            };
            let inner = &tail[1..1 + end];
            let placeholder = &tail[..end + 2];

            let index = if inner.is_empty() {
                next += 1;
                Some(next - 1)
            } else {
                inner.trim().parse::<usize>().ok()
            };

            match index.and_then(|i| self.args.get(i)) {
                Some(arg) => write!(f, "{}", arg)?,
                None => f.write_str(placeholder)?,
            }
            rest = &tail[end + 2..];
        }

        f.write_str(rest)
    }
}

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rendered")
            .field("source", &self.source)
            .field("args", &self.args.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_placeholders() {
        let t = Template::new("user {} logged in from {}");
        assert_eq!(t.render(&[&"alice", &"10.0.0.1"]), "user alice logged in from 10.0.0.1");
    }

    #[test]
    fn test_indexed_placeholders() {
        let t = Template::new("{1} before {0}, {1} again");
        assert_eq!(t.render(&[&1, &2]), "2 before 1, 2 again");
    }

    #[test]
    fn test_escaped_braces() {
        let t = Template::new("{{literal}} {}");
        assert_eq!(t.render(&[&"x"]), "{literal} x");
    }

    #[test]
    fn test_missing_argument_kept_verbatim() {
        let t = Template::new("a={} b={} c={5}");
        assert_eq!(t.render(&[&1]), "a=1 b={} c={5}");
    }

    #[test]
    fn test_unterminated_and_named() {
        assert_eq!(Template::new("value {oops").render(&[&1]), "value {oops");
        assert_eq!(Template::new("{name}").render(&[&1]), "{name}");
        assert_eq!(Template::new("stray } brace").render(&[]), "stray } brace");
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        assert_eq!(Template::new("only {}").render(&[&"one", &"two"]), "only one");
    }
}
