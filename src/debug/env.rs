const ROOT_PREFIX: &str = "TRIANGULATE";

pub(crate) mod svg {
    use std::{env, path};

    use crate::debug::svg::SvgOutputLevel;

    const GROUP_PREFIX: &str = "SVG";

    fn var(key: &str) -> Option<String> {
        env::var(format!("{}_{}_{}", super::ROOT_PREFIX, GROUP_PREFIX, key)).ok()
    }

    /// Directory the step-by-step SVGs are written to; unset disables SVG output
    pub(crate) fn output_path() -> Option<path::PathBuf> {
        var("OUTPUT_PATH").map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        var("HIDE_LABELS").is_none()
    }

    pub(crate) fn output_level() -> SvgOutputLevel {
        match var("OUTPUT_LEVEL").as_deref().map(str::trim) {
            Some("3") => SvgOutputLevel::AllSteps,
            Some("2") => SvgOutputLevel::MajorSteps,
            Some("1") => SvgOutputLevel::ResultOnly,
            _ => SvgOutputLevel::None,
        }
    }
}
