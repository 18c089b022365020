use paymap_core::BudgetRecord;

use crate::payee::ResolvePayee;

/// Implemented by any record an input adapter produces, so enrichment can
/// read the memo and write the resolved payee back without knowing the
/// institution's field layout.
pub trait MemoSource {
    fn memo(&self) -> &str;
    fn set_payee(&mut self, payee: Option<String>);
}

impl MemoSource for BudgetRecord {
    fn memo(&self) -> &str {
        &self.memo
    }

    fn set_payee(&mut self, payee: Option<String>) {
        self.payee = payee;
    }
}

/// Resolves one payee per record, sequentially and in input order. An empty
/// resolver result leaves the record without a payee; the miss is already
/// recorded inside the resolver for end-of-run reporting.
pub fn assign_payees<R, T>(resolver: &mut R, records: &mut [T])
where
    R: ResolvePayee + ?Sized,
    T: MemoSource,
{
    for record in records.iter_mut() {
        let payee = resolver.resolve(record.memo());
        record.set_payee(if payee.is_empty() { None } else { Some(payee) });
    }
}
