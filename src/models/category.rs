//! Static registry of arXiv subject categories.

use crate::error::{FeedError, Result};

/// Every subject category accepted by the arXiv feeds, in registry order.
static ALL_CATEGORIES: &[&str] = &[
    "stat.AP", "stat.CO", "stat.ML", "stat.ME", "stat.OT", "stat.TH", "stat", "q-fin.PR",
    "q-fin.RM", "q-fin.PM", "q-fin.TR", "q-fin.MF", "q-fin.CP", "q-fin.ST", "q-fin.GN",
    "q-fin.EC", "q-fin", "q-bio.BM", "q-bio.GN", "q-bio.MN", "q-bio.SC", "q-bio.CB",
    "q-bio.NC", "q-bio", "q-bio.TO", "q-bio.PE", "q-bio.QM", "q-bio.OT", "cs.AI", "cs.CL",
    "cs.CC", "cs.CE", "cs.CG", "cs.GT", "cs.CV", "cs.CY", "cs.CR", "cs.DS", "cs.DB", "cs.DL",
    "cs.DM", "cs.DC", "cs.ET", "cs.FL", "cs.GL", "cs.GR", "cs.AR", "cs.HC", "cs.IR", "cs.IT",
    "cs.LG", "cs.LO", "cs.MS", "cs.MA", "cs.MM", "cs.NI", "cs.NE", "cs.NA", "cs.OS", "cs.OH",
    "cs.PF", "cs.PL", "cs.RO", "cs.SI", "cs.SE", "cs.SD", "cs.SC", "cs.SY", "cs",
    "astro-ph.GA", "astro-ph.CO", "astro-ph.EP", "astro-ph.HE", "astro-ph.IM", "astro-ph.SR",
    "astro-ph", "cond-mat.dis-nn", "cond-mat.mtrl-sci", "cond-mat.mes-hall", "cond-mat.other",
    "cond-mat.quant-gas", "cond-mat.soft", "cond-mat.stat-mech", "cond-mat.str-el",
    "cond-mat.supr-con", "cond-mat", "gr-qc", "hep-ex", "hep-lat", "hep-ph", "hep-th",
    "math-ph", "nlin.AO", "nlin.CG", "nlin.CD", "nlin.SI", "nlin.PS", "nlin", "nucl-ex",
    "nucl-th", "physics", "physics.acc-ph", "physics.app-ph", "physics.ao-ph",
    "physics.atom-ph", "physics.atm-clus", "physics.bio-ph", "physics.chem-ph",
    "physics.class-ph", "physics.comp-ph", "physics.data-an", "physics.flu-dyn",
    "physics.gen-ph", "physics.geo-ph", "physics.hist-ph", "physics.ins-det", "physics.med-ph",
    "physics.optics", "physics.ed-ph", "physics.soc-ph", "physics.plasm-ph", "physics.pop-ph",
    "physics.space-ph", "econ", "eess", "quant-ph", "math", "math.AG", "math.AT", "math.AP",
    "math.CT", "math.CA", "math.CO", "math.AC", "math.CV", "math.DG", "math.DS", "math.FA",
    "math.GM", "math.GN", "math.GT", "math.GR", "math.HO", "math.IT", "math.KT", "math.LO",
    "math.MP", "math.MG", "math.NT", "math.NA", "math.OA", "math.OC", "math.PR", "math.QA",
    "math.RT", "math.RA", "math.SP", "math.ST", "math.SG",
];

/// Read-only view over the fixed category set
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// Check whether `code` is a known category (exact match)
    pub fn exists(code: &str) -> bool {
        ALL_CATEGORIES.contains(&code)
    }

    /// Number of known categories
    pub fn count() -> usize {
        ALL_CATEGORIES.len()
    }

    /// Category at position `index` in registry order
    pub fn by_index(index: usize) -> Result<&'static str> {
        ALL_CATEGORIES
            .get(index)
            .copied()
            .ok_or(FeedError::IndexOutOfRange {
                index,
                count: ALL_CATEGORIES.len(),
            })
    }

    /// Same as [`by_index`](Self::by_index) for an index given as text
    pub fn by_index_str(index: &str) -> Result<&'static str> {
        let index = index.trim().parse::<usize>().map_err(|_| {
            FeedError::InvalidArgument(format!("category index '{}' is not an integer", index))
        })?;
        Self::by_index(index)
    }

    /// Iterate over all categories in registry order
    pub fn all() -> impl Iterator<Item = &'static str> {
        ALL_CATEGORIES.iter().copied()
    }
}
