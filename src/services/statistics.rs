//! services/statistics.rs
//! Conteos por status sobre cualquier colección.

use serde::Serialize;

pub trait Summarize: Sized {
    type Summary: Serialize + Default;

    /// Suma este registro a los conteos acumulados.
    fn tally(&self, summary: &mut Self::Summary);
}

pub fn summarize<E: Summarize>(items: &[E]) -> E::Summary {
    let mut summary = E::Summary::default();
    for item in items {
        item.tally(&mut summary);
    }
    summary
}
