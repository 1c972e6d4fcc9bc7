use super::model::{LaunchTable, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Row filters: control values → indices into the table
// ---------------------------------------------------------------------------

/// Rows feeding the site-success pie chart.
///
/// * `All` → every successful launch, any site.
/// * `Site(s)` → every launch from `s`, whatever its outcome.
///
/// An unknown site simply matches nothing.
pub fn site_success_indices(table: &LaunchTable, site: &SiteSelection) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| match site {
            SiteSelection::All => rec.outcome.is_success(),
            SiteSelection::Site(name) => rec.launch_site == *name,
        })
        .map(|(i, _)| i)
        .collect()
}

/// Rows feeding the payload-outcome scatter chart: payload strictly inside
/// `range`, restricted to the selected site unless `All`.
pub fn payload_outcome_indices(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    if range.is_empty() {
        return Vec::new();
    }
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.launch_site) && range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

/// Count the given rows per launch site, in the table's first-seen site
/// order. Sites without rows are left out.
pub fn count_by_site(table: &LaunchTable, indices: &[usize]) -> Vec<(String, usize)> {
    let records = table.records();
    table
        .sites()
        .iter()
        .filter_map(|site| {
            let n = indices
                .iter()
                .filter(|&&i| records[i].launch_site == *site)
                .count();
            (n > 0).then(|| (site.clone(), n))
        })
        .collect()
}
