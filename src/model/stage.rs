// File: ./src/model/stage.rs
// Life stages: the stage model builder and the month classifier.
use crate::months::{add_years, months_between};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Dependents are counted as "time with kids" until they turn this old.
pub const DEPENDENT_YEARS: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StageKind {
    Childhood,
    School,
    Studies,
    Work,
    Kids,
}

impl StageKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StageKind::Childhood => "Childhood",
            StageKind::School => "School",
            StageKind::Studies => "Studies",
            StageKind::Work => "Work",
            StageKind::Kids => "Time with kids",
        }
    }

    /// Single-character cell marker for text output.
    pub fn glyph(&self) -> char {
        match self {
            StageKind::Childhood => 'c',
            StageKind::School => 's',
            StageKind::Studies => 'u',
            StageKind::Work => 'w',
            StageKind::Kids => 'k',
        }
    }

    /// The overlay stage is tracked but does not take part in the primary chain.
    pub fn is_overlay(&self) -> bool {
        matches!(self, StageKind::Kids)
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum StageColor {
    Teal,
    Sky,
    Amber,
    Rose,
    Lime,
    Violet,
}

impl fmt::Display for StageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageColor::Teal => write!(f, "teal"),
            StageColor::Sky => write!(f, "sky"),
            StageColor::Amber => write!(f, "amber"),
            StageColor::Rose => write!(f, "rose"),
            StageColor::Lime => write!(f, "lime"),
            StageColor::Violet => write!(f, "violet"),
        }
    }
}

/// Color token per stage. Missing entries fall back to the defaults.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StagePalette {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub childhood: Option<StageColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<StageColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studies: Option<StageColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<StageColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<StageColor>,
}

impl StagePalette {
    pub fn color_for(&self, kind: StageKind) -> StageColor {
        let (custom, fallback) = match kind {
            StageKind::Childhood => (self.childhood, StageColor::Teal),
            StageKind::School => (self.school, StageColor::Sky),
            StageKind::Studies => (self.studies, StageColor::Amber),
            StageKind::Work => (self.work, StageColor::Rose),
            StageKind::Kids => (self.kids, StageColor::Lime),
        };
        custom.unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependent {
    pub name: String,
    pub birth: NaiveDate,
}

/// Everything the stage model is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestones {
    pub birth: NaiveDate,
    pub school_start_age: u32,
    pub school_end: NaiveDate,
    pub studies_end: NaiveDate,
    pub now: NaiveDate,
    pub dependents: Vec<Dependent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentSpan {
    pub name: String,
    pub start: i64,
    pub end: i64,
}

impl DependentSpan {
    pub fn contains(&self, month: i64) -> bool {
        self.start <= month && month <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeStage {
    pub kind: StageKind,
    pub name: String,
    pub color: StageColor,
    pub start: i64,
    pub end: i64,
    pub dependents: Vec<DependentSpan>,
}

impl LifeStage {
    fn new(kind: StageKind, palette: &StagePalette, start: i64, end: i64) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            color: palette.color_for(kind),
            start,
            end,
            dependents: Vec::new(),
        }
    }

    /// Inclusive on both ends. An inverted interval contains nothing.
    pub fn contains(&self, month: i64) -> bool {
        self.start <= month && month <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Length shown next to a stage label: `end - start`.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered stage records: childhood, school, studies, work, then the kids overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageModel {
    stages: Vec<LifeStage>,
}

impl StageModel {
    pub fn build(milestones: &Milestones, palette: &StagePalette) -> Self {
        let birth = milestones.birth;

        let school_start = add_years(birth, milestones.school_start_age as i32);
        let childhood = LifeStage::new(
            StageKind::Childhood,
            palette,
            1,
            months_between(school_start, birth),
        );

        let school = LifeStage::new(
            StageKind::School,
            palette,
            childhood.end + 1,
            months_between(milestones.school_end, birth),
        );

        let studies = LifeStage::new(
            StageKind::Studies,
            palette,
            school.end + 1,
            school.end + months_between(milestones.studies_end, milestones.school_end),
        );

        let work = LifeStage::new(
            StageKind::Work,
            palette,
            studies.end + 1,
            studies.end + months_between(milestones.now, milestones.studies_end),
        );

        let mut kids = LifeStage::new(StageKind::Kids, palette, 0, 0);
        kids.dependents = milestones
            .dependents
            .iter()
            .map(|dep| {
                let start = months_between(dep.birth, birth);
                let grown_up = add_years(dep.birth, DEPENDENT_YEARS);
                DependentSpan {
                    name: dep.name.clone(),
                    start,
                    end: start + months_between(grown_up, dep.birth),
                }
            })
            .collect();

        let stages = vec![childhood, school, studies, work, kids];
        for stage in stages.iter().filter(|s| s.is_empty()) {
            log::warn!(
                "Stage '{}' is inverted ({}..{}); it will never match",
                stage.name,
                stage.start,
                stage.end
            );
        }

        Self { stages }
    }

    /// First stage, in insertion order, whose interval contains `month`.
    ///
    /// The kids entry spans `0..=0`, so it never matches a month index.
    pub fn classify(&self, month: i64) -> Option<&LifeStage> {
        self.stages.iter().find(|stage| stage.contains(month))
    }

    pub fn stages(&self) -> &[LifeStage] {
        &self.stages
    }

    pub fn get(&self, kind: StageKind) -> Option<&LifeStage> {
        self.stages.iter().find(|s| s.kind == kind)
    }

    /// The four stages of the contiguous chain, in order.
    pub fn primary(&self) -> impl Iterator<Item = &LifeStage> {
        self.stages.iter().filter(|s| !s.kind.is_overlay())
    }

    /// Dependents whose span contains `month`. Informational only.
    pub fn dependents_at(&self, month: i64) -> Vec<&str> {
        self.get(StageKind::Kids)
            .map(|kids| {
                kids.dependents
                    .iter()
                    .filter(|span| span.contains(month))
                    .map(|span| span.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All stage kinds, whether or not the model has them.
    pub fn kinds() -> impl Iterator<Item = StageKind> {
        StageKind::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn milestones(now: NaiveDate) -> Milestones {
        Milestones {
            birth: d(1991, 3, 21),
            school_start_age: 7,
            school_end: d(2008, 6, 1),
            studies_end: d(2015, 3, 1),
            now,
            dependents: vec![Dependent {
                name: "Emily".to_string(),
                birth: d(2020, 7, 1),
            }],
        }
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let model = StageModel::build(&milestones(d(2024, 1, 1)), &StagePalette::default());
        let kinds: Vec<_> = model.stages().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, StageModel::kinds().collect::<Vec<_>>());
    }

    #[test]
    fn test_inverted_stage_never_matches() {
        // "now" before the end of studies: work ends before it starts.
        let model = StageModel::build(&milestones(d(2010, 1, 1)), &StagePalette::default());
        let work = model.get(StageKind::Work).unwrap();
        assert!(work.is_empty());
        assert!((work.end..=work.start).all(|m| !work.contains(m)));
        assert_eq!(model.classify(work.start).map(|s| s.kind), None);
    }

    #[test]
    fn test_palette_overrides() {
        let palette = StagePalette {
            work: Some(StageColor::Violet),
            ..Default::default()
        };
        assert_eq!(palette.color_for(StageKind::Work), StageColor::Violet);
        assert_eq!(palette.color_for(StageKind::School), StageColor::Sky);
    }
}
