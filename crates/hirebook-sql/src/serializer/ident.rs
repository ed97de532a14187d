use super::{Formatter, ToSql};

/// A quoted SQL identifier (table or column name).
///
/// Embedded double quotes are doubled, so the identifier can never close its
/// own quoting.
pub struct Ident<S>(pub S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('"');
        for c in self.0.as_ref().chars() {
            if c == '"' {
                f.dst.push('"');
            }
            f.dst.push(c);
        }
        f.dst.push('"');
    }
}
