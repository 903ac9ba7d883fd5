pub mod config;
pub mod dates;
pub mod render;
pub mod style;
pub mod toggler;

pub use config::EnhanceConfig;

use graft_core::{EnhanceOutcome, GraftResult, PagePatch};
use graft_detect::detect_with;
use graft_dom::Page;
use tracing::info;

/// Run one enhancement pass over a page: detect the platform once, plan
/// each feature independently, render the accumulated patch in one go.
///
/// Detection failure leaves the page untouched (`html: None`); once the
/// platform is recognized the stylesheet is installed even when neither
/// feature finds something to attach to. Re-running over already-enhanced
/// output is not guarded against.
pub fn enhance(page: &Page, config: &EnhanceConfig) -> GraftResult<EnhanceOutcome> {
    let signal = match detect_with(page, &config.platform_candidates) {
        Some(signal) => signal,
        None => {
            info!("page is not wordpress-generated, leaving it untouched");
            return Ok(EnhanceOutcome {
                platform: None,
                dates_inserted: false,
                toggler_inserted: false,
                html: None,
            });
        }
    };

    let mut patch = PagePatch {
        style_rules: style::base_rules(),
        ..Default::default()
    };

    let dates_inserted = config.dates_enabled && dates::plan_date_banner(page, config, &mut patch);
    let toggler_inserted =
        config.toggler_enabled && toggler::plan_toggler(page, config, &mut patch);

    let html = render::apply_patch(page, &patch)?;
    Ok(EnhanceOutcome {
        platform: Some(signal),
        dates_inserted,
        toggler_inserted,
        html: Some(html),
    })
}
