//! Filter values, their normalization, and the editable filter form.
//!
//! Normalization is deliberately lenient: out-of-range values are clamped
//! rather than rejected, non-positive values count as "no filter", and a
//! min/max pair given the wrong way round is swapped.

use crate::models::ActivityType;

/// An optional min/max constraint over a score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Clamp both ends to [0, 1] and swap them if max ended up below min.
    /// Non-positive values are treated as unset.
    pub fn normalized(self) -> Self {
        let min = self.min.and_then(clamp_score);
        let max = self.max.and_then(clamp_score);
        match (min, max) {
            (Some(lo), Some(hi)) if hi < lo => Self {
                min: Some(hi),
                max: Some(lo),
            },
            _ => Self { min, max },
        }
    }

    /// Like [`RangeFilter::normalized`] but without the upper clamp, for
    /// ranges that are not 0..1 scores (durations).
    pub fn normalized_unbounded(self) -> Self {
        let min = self.min.filter(|v| v.is_finite() && *v > 0.0);
        let max = self.max.filter(|v| v.is_finite() && *v > 0.0);
        match (min, max) {
            (Some(lo), Some(hi)) if hi < lo => Self {
                min: Some(hi),
                max: Some(lo),
            },
            _ => Self { min, max },
        }
    }
}

fn clamp_score(value: f64) -> Option<f64> {
    // NaN and the infinities count as unset, same as non-positive values.
    if !value.is_finite() || value <= 0.0 {
        None
    } else {
        Some(value.min(1.0))
    }
}

/// The current set of user-chosen constraints. All fields optional; an
/// empty `Filters` asks the API for any activity at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub kind: Option<ActivityType>,
    pub participants: Option<u32>,
    pub price: RangeFilter,
    pub accessibility: RangeFilter,
    pub duration: RangeFilter,
}

impl Filters {
    /// Encode the set constraints as query parameters for the API call.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(kind) = self.kind {
            params.push(("type", kind.query_value().to_string()));
        }
        if let Some(participants) = self.participants {
            params.push(("participants", participants.to_string()));
        }
        push_range(&mut params, "minprice", "maxprice", self.price);
        push_range(
            &mut params,
            "minaccessibility",
            "maxaccessibility",
            self.accessibility,
        );
        push_range(&mut params, "minduration", "maxduration", self.duration);
        params
    }
}

fn push_range(
    params: &mut Vec<(&'static str, String)>,
    min_name: &'static str,
    max_name: &'static str,
    range: RangeFilter,
) {
    if let Some(min) = range.min {
        params.push((min_name, format_score(min)));
    }
    if let Some(max) = range.max {
        params.push((max_name, format_score(max)));
    }
}

/// Render a score without trailing float noise ("0.3", not "0.30000000004").
fn format_score(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

// ---------------------------------------------------------------------------
// Editable form state

/// What a form field accepts, validated per keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
}

/// One editable field in the filter panel.
#[derive(Debug, Clone)]
pub struct FilterField {
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
    pub buffer: String,
}

impl FilterField {
    fn new(label: &'static str, hint: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            hint,
            kind,
            buffer: String::new(),
        }
    }

    /// Append a character if the resulting buffer still parses.
    /// Invalid keystrokes are dropped, matching numeric-only inputs.
    /// Float fields take digits and one decimal point, nothing else,
    /// so spellings like "inf" and "nan" never reach the buffer.
    pub fn push_char(&mut self, c: char) {
        let allowed = match self.kind {
            FieldKind::Int => c.is_ascii_digit(),
            FieldKind::Float => c.is_ascii_digit() || (c == '.' && !self.buffer.contains('.')),
        };
        if !allowed {
            return;
        }
        let mut candidate = self.buffer.clone();
        candidate.push(c);
        let accepted = match self.kind {
            FieldKind::Int => candidate.parse::<u32>().is_ok(),
            FieldKind::Float => candidate.parse::<f64>().is_ok(),
        };
        if accepted {
            self.buffer = candidate;
        }
    }

    pub fn pop_char(&mut self) {
        self.buffer.pop();
    }

    fn as_float(&self) -> Option<f64> {
        self.buffer.trim().parse().ok()
    }

    fn as_participants(&self) -> Option<u32> {
        self.buffer.trim().parse().ok().filter(|v| *v > 0)
    }
}

/// Field order in the panel; also the indices into `FilterForm::fields`.
const PARTICIPANTS: usize = 0;
const MIN_PRICE: usize = 1;
const MAX_PRICE: usize = 2;
const MIN_ACCESSIBILITY: usize = 3;
const MAX_ACCESSIBILITY: usize = 4;
const MIN_DURATION: usize = 5;
const MAX_DURATION: usize = 6;

/// The filter panel's editable state. Holds raw text buffers; the
/// normalized [`Filters`] value is derived on demand.
#[derive(Debug, Clone)]
pub struct FilterForm {
    pub fields: Vec<FilterField>,
    pub active: usize,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FilterField::new("Participants", "number of participants", FieldKind::Int),
                FilterField::new("Min price", "0 (free) to 1 (expensive)", FieldKind::Float),
                FilterField::new("Max price", "0 (free) to 1 (expensive)", FieldKind::Float),
                FilterField::new("Min accessibility", "0 (most) to 1 (least)", FieldKind::Float),
                FilterField::new("Max accessibility", "0 (most) to 1 (least)", FieldKind::Float),
                FilterField::new("Min duration", "in minutes", FieldKind::Float),
                FilterField::new("Max duration", "in minutes", FieldKind::Float),
            ],
            active: 0,
        }
    }
}

impl FilterForm {
    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    pub fn active_field_mut(&mut self) -> &mut FilterField {
        &mut self.fields[self.active]
    }

    pub fn clear_active(&mut self) {
        self.fields[self.active].buffer.clear();
    }

    /// Build the normalized filter value from the current buffers.
    /// The category comes from the type selector, not from the form.
    pub fn values(&self, kind: Option<ActivityType>) -> Filters {
        Filters {
            kind,
            participants: self.fields[PARTICIPANTS].as_participants(),
            price: RangeFilter::new(
                self.fields[MIN_PRICE].as_float(),
                self.fields[MAX_PRICE].as_float(),
            )
            .normalized(),
            accessibility: RangeFilter::new(
                self.fields[MIN_ACCESSIBILITY].as_float(),
                self.fields[MAX_ACCESSIBILITY].as_float(),
            )
            .normalized(),
            duration: RangeFilter::new(
                self.fields[MIN_DURATION].as_float(),
                self.fields[MAX_DURATION].as_float(),
            )
            .normalized_unbounded(),
        }
    }
}
