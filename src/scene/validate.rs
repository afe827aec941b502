use crate::scene::settings::Settings;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SettingsIssue {
    pub(crate) path: Vec<SettingsPathElem>,
    pub(crate) message: String,
}

impl SettingsIssue {
    fn at(path: &[SettingsPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SettingsPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SettingsPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SettingsPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SettingsErrors {
    pub(crate) errors: Vec<SettingsIssue>,
}

impl fmt::Display for SettingsErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SettingsErrors {}

const CANVAS_MIN: u32 = 100;
const CANVAS_MAX: u32 = 5700;
const POINTS_MAX: u32 = 150;
const SPEED_MAX: f32 = 2.0;
const DURATION_MIN_SECS: f32 = 1.0;
const DURATION_MAX_SECS: f32 = 30.0;

pub(crate) fn validate_settings(s: &Settings) -> Result<(), SettingsErrors> {
    use SettingsPathElem::{Field, Index};

    let mut errors = Vec::new();

    for (name, v) in [("width", s.canvas.width), ("height", s.canvas.height)] {
        if !(CANVAS_MIN..=CANVAS_MAX).contains(&v) {
            errors.push(SettingsIssue::at(
                &[Field("canvas"), Field(name)],
                format!("must be in [{CANVAS_MIN}, {CANVAS_MAX}], got {v}"),
            ));
        }
    }

    if !(1..=POINTS_MAX).contains(&s.point_count) {
        errors.push(SettingsIssue::at(
            &[Field("point_count")],
            format!("must be in [1, {POINTS_MAX}], got {}", s.point_count),
        ));
    }

    check_unit_range(&mut errors, &[Field("z_spread")], s.z_spread, 0.0);
    check_unit_range(&mut errors, &[Field("point_size")], s.point_size, 0.01);

    for (i, v) in s.threshold.iter().enumerate() {
        check_unit_range(&mut errors, &[Field("threshold"), Index(i)], *v, 0.0);
    }
    if s.threshold[0] >= s.threshold[1] {
        errors.push(SettingsIssue::at(
            &[Field("threshold")],
            format!(
                "low must be < high, got [{}, {}]",
                s.threshold[0], s.threshold[1]
            ),
        ));
    }

    if !s.speed.is_finite() || !(0.0..=SPEED_MAX).contains(&s.speed) {
        errors.push(SettingsIssue::at(
            &[Field("speed")],
            format!("must be in [0, {SPEED_MAX}], got {}", s.speed),
        ));
    }

    if s.capture.fps == 0 {
        errors.push(SettingsIssue::at(
            &[Field("capture"), Field("fps")],
            "must be >= 1",
        ));
    }
    if !s.capture.duration_secs.is_finite()
        || !(DURATION_MIN_SECS..=DURATION_MAX_SECS).contains(&s.capture.duration_secs)
    {
        errors.push(SettingsIssue::at(
            &[Field("capture"), Field("duration_secs")],
            format!(
                "must be in [{DURATION_MIN_SECS}, {DURATION_MAX_SECS}], got {}",
                s.capture.duration_secs
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SettingsErrors { errors })
    }
}

fn check_unit_range(
    errors: &mut Vec<SettingsIssue>,
    path: &[SettingsPathElem],
    v: f32,
    min: f32,
) {
    if !v.is_finite() || !(min..=1.0).contains(&v) {
        errors.push(SettingsIssue::at(
            path,
            format!("must be in [{min}, 1], got {v}"),
        ));
    }
}
