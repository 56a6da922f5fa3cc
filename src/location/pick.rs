use serde::{Deserialize, Serialize};

use crate::lib::{String, Vec};
use crate::time::{self, parse_iso8601};
use crate::utils::{self, fold_errors, text, Unset};
use crate::{FormatResult, ProcessingFormat, Site, Source};

/// A single phase arrival observed at one station.
///
/// `LocatedPhase` and everything after it are filled in by a locator and
/// are optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Pick {
    #[serde(
        rename = "ID",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "utils::nested")]
    pub site: Site,
    #[serde(deserialize_with = "utils::nested")]
    pub source: Source,
    /// epoch seconds
    #[serde(with = "time", skip_serializing_if = "time::is_unrepresentable")]
    pub time: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub affinity: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub quality: Option<f64>,
    #[serde(rename = "Use", deserialize_with = "utils::flag")]
    pub use_pick: bool,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub picked_phase: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub associated_phase: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub located_phase: Option<String>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub residual: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub distance: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub azimuth: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub importance: Option<f64>,
}

impl Pick {
    pub fn builder() -> PickBuilder {
        PickBuilder::new()
    }
}

impl ProcessingFormat for Pick {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.id, "Empty ID in Pick class.");
        fold_errors(
            &mut errors,
            "Site object did not validate in Pick class:",
            self.site.errors(),
        );
        fold_errors(
            &mut errors,
            "Source object did not validate in Pick class:",
            self.source.errors(),
        );
        errors.extend(time::time_error(self.time, "Time", "Pick"));
        require!(errors, self.affinity, "No Affinity in Pick Class.");
        require!(errors, self.quality, "No Quality in Pick Class.");
        require!(errors, self.picked_phase, "Empty Picked Phase in Pick class.");
        require!(
            errors,
            self.associated_phase,
            "Empty Associated Phase in Pick class."
        );
        errors
    }
}

/// Builds a [`Pick`] either from a ready [`Site`]/[`Source`] or from their
/// individual parts; both routes give the same record.
#[derive(Debug, Clone, Default)]
pub struct PickBuilder {
    pick: Pick,
}

impl PickBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.pick.id = text(id);
        self
    }

    pub fn site(mut self, site: Site) -> Self {
        self.pick.site = site;
        self
    }

    /// Station, channel, network and location code.
    pub fn scnl(mut self, station: &str, channel: &str, network: &str, location: &str) -> Self {
        self.pick.site.station = text(station);
        self.pick.site.channel = text(channel);
        self.pick.site.network = text(network);
        self.pick.site.location = text(location);
        self
    }

    pub fn coordinates(
        mut self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation: Option<f64>,
    ) -> Self {
        self.pick.site.latitude = latitude;
        self.pick.site.longitude = longitude;
        self.pick.site.elevation = elevation;
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.pick.source = source;
        self
    }

    pub fn source_parts(mut self, agency_id: &str, author: &str, source_type: &str) -> Self {
        self.pick.source = Source::new(agency_id, author, source_type);
        self
    }

    pub fn time(mut self, epoch: f64) -> Self {
        self.pick.time = Some(epoch);
        self
    }

    pub fn time_iso8601(mut self, time: &str) -> FormatResult<Self> {
        self.pick.time = Some(parse_iso8601(time)?);
        Ok(self)
    }

    pub fn affinity(mut self, affinity: f64) -> Self {
        self.pick.affinity = Some(affinity);
        self
    }

    pub fn quality(mut self, quality: f64) -> Self {
        self.pick.quality = Some(quality);
        self
    }

    pub fn use_pick(mut self, use_pick: bool) -> Self {
        self.pick.use_pick = use_pick;
        self
    }

    pub fn picked_phase(mut self, phase: &str) -> Self {
        self.pick.picked_phase = text(phase);
        self
    }

    pub fn associated_phase(mut self, phase: &str) -> Self {
        self.pick.associated_phase = text(phase);
        self
    }

    pub fn located_phase(mut self, phase: &str) -> Self {
        self.pick.located_phase = text(phase);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.pick.residual = Some(residual);
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.pick.distance = Some(distance);
        self
    }

    pub fn azimuth(mut self, azimuth: f64) -> Self {
        self.pick.azimuth = Some(azimuth);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.pick.weight = Some(weight);
        self
    }

    pub fn importance(mut self, importance: f64) -> Self {
        self.pick.importance = Some(importance);
        self
    }

    pub fn build(self) -> Pick {
        log::trace!("built pick {:?}", self.pick.id);
        self.pick
    }
}
