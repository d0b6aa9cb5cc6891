//! This module provides a local file backing for planner data
//!
//! The planner itself is purely in-memory; apps that want their schedule back after a
//! restart can hold it in a [`Cache`], which reads and writes a single JSON file.
//! The file maps ISO calendar date strings to each day's record, task order preserved.

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::labels::LabelSet;
use crate::planner::Planner;

/// A planner (and its label set) that stores its data in a local file
#[derive(Debug, PartialEq)]
pub struct Cache {
    backing_file: PathBuf,
    data: CachedData,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct CachedData {
    planner: Planner,
    labels: LabelSet,
}

impl Cache {
    /// Initialize a cache from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            }
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            data,
        })
    }

    /// Initialize a cache with the default contents
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            data: CachedData::default(),
        }
    }

    /// Store the current contents to the backing file.
    ///
    /// An unwritable file is logged and otherwise ignored: the in-memory data stays
    /// valid and a later save may still succeed.
    pub fn save_to_file(&self) {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            }
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &self.data) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }

    pub fn planner(&self) -> &Planner {
        &self.data.planner
    }

    pub fn planner_mut(&mut self) -> &mut Planner {
        &mut self.data.planner
    }

    pub fn labels(&self) -> &LabelSet {
        &self.data.labels
    }

    pub fn labels_mut(&mut self) -> &mut LabelSet {
        &mut self.data.labels
    }
}
