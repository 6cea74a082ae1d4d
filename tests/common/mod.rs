// tests/common/mod.rs
//
// In-memory dataset mirror for façade tests.
//
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use atp_stats::{Fetch, FetchError, Resource};

#[derive(Default)]
pub struct FakeMirror {
    files: HashMap<Resource, String>,
    failing: HashSet<Resource>,
    calls: Mutex<Vec<Resource>>,
}

impl FakeMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: Resource, text: &str) -> Self {
        self.files.insert(resource, text.to_string());
        self
    }

    /// Served as HTTP 503.
    pub fn failing(mut self, resource: Resource) -> Self {
        self.failing.insert(resource);
        self
    }

    pub fn calls(&self) -> Vec<Resource> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetch for FakeMirror {
    async fn fetch_text(&self, resource: Resource) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(resource);
        let url = resource.url("http://mirror.test");
        if self.failing.contains(&resource) {
            return Err(FetchError::Status { url, status: 503 });
        }
        self.files
            .get(&resource)
            .cloned()
            .ok_or(FetchError::Status { url, status: 404 })
    }
}

pub const PLAYERS_CSV: &str = "\
player_id,name,first_name,last_name,birth_date,country,ht
104745,Rafael Nadal,Rafael,Nadal,19860603,ESP,185
104925,,Novak,Djokovic,19870522,SRB,188
106421,Daniil Medvedev,Daniil,Medvedev,19960211,RUS,198
";
