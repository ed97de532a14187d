use super::{Formatter, Params, ToSql};

use hirebook_core::stmt::Value;

impl ToSql for Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = Params::push(&mut f.params, self);
        placeholder.to_sql(f);
    }
}

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        self.clone().to_sql(f);
    }
}
