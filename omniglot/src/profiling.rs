//! Stage timing of image loading, compiled away unless the `profiling` feature is enabled.

use crate::common::*;

#[cfg(feature = "profiling")]
lazy_static::lazy_static! {
    static ref PROFILING_CONFIG: ProfilingConfig = envy::prefixed("OMNIGLOT_")
        .from_env()
        .unwrap_or_else(|err| {
            warn!("invalid OMNIGLOT_* profiling variables, reporting every stage: {}", err);
            ProfilingConfig::default()
        });
}

/// Options read from `OMNIGLOT_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingConfig {
    /// Comma separated stages allowed to report, e.g. `decode,resize`. All stages
    /// report if unset.
    pub profiling_whitelist: Option<HashSet<LoadStage>>,
}

/// A step of [OnDemandLoader::load](crate::processor::OnDemandLoader::load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStage {
    Decode,
    Grayscale,
    Resize,
}

impl LoadStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Grayscale => "grayscale",
            Self::Resize => "resize",
        }
    }
}

/// Elapsed time of each stage while loading one image file.
#[derive(Debug)]
pub struct LoadProfile {
    #[cfg(feature = "profiling")]
    path: PathBuf,
    #[cfg(feature = "profiling")]
    instant: Instant,
    #[cfg(feature = "profiling")]
    stages: Vec<(LoadStage, Duration)>,
}

impl LoadProfile {
    pub fn start(path: &Path) -> Self {
        #[cfg(feature = "profiling")]
        {
            Self {
                path: path.to_owned(),
                instant: Instant::now(),
                stages: Vec::with_capacity(3),
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            let _ = path;
            Self {}
        }
    }

    /// Close the running stage and start timing the next one.
    pub fn finish_stage(&mut self, stage: LoadStage) {
        #[cfg(feature = "profiling")]
        {
            self.stages.push((stage, self.instant.elapsed()));
            self.instant = Instant::now();
        }

        #[cfg(not(feature = "profiling"))]
        let _ = stage;
    }

    pub fn report(&self) {
        #[cfg(feature = "profiling")]
        {
            let whitelist = PROFILING_CONFIG.profiling_whitelist.as_ref();
            let line = self
                .stages
                .iter()
                .filter(|(stage, _)| whitelist.map_or(true, |list| list.contains(stage)))
                .map(|(stage, elapsed)| format!("{} {:?}", stage.as_str(), elapsed))
                .join(", ");

            if !line.is_empty() {
                info!("loaded '{}': {}", self.path.display(), line);
            }
        }
    }
}
