//! Common test utilities and fixtures

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small flight dataset covering every question
///
/// - one zero-seat row (skipped by the empty-flights question)
/// - a city pair flown in both directions in the same month
/// - city names containing quoted commas
pub const FLIGHTS_CSV: &str = "\
Origin_airport,Destination_airport,Origin_city,Destination_city,Passengers,Seats,Flights,Distance,Origin_population,Destination_population,Fly_date
MHK,AMW,\"Manhattan, KS\",\"Ames, IA\",21,30,1,254,122049,86219,2008-10-01
EUG,RDM,\"Eugene, OR\",\"Bend, OR\",41,396,22,103,284093,76034,1990-11-01
EUG,RDM,\"Eugene, OR\",\"Bend, OR\",88,342,19,103,284093,76034,1990-12-01
EUG,RDM,\"Eugene, OR\",\"Bend, OR\",11,72,4,103,284093,76034,1990-10-01
MFR,RDM,\"Medford, OR\",\"Bend, OR\",0,18,1,156,147300,76034,1990-02-01
MFR,RDM,\"Medford, OR\",\"Bend, OR\",11,18,1,156,147300,76034,1990-03-01
SEA,RDM,\"Seattle, WA\",\"Bend, OR\",8,0,0,228,2997034,76034,1990-02-01
RDM,SEA,\"Bend, OR\",\"Seattle, WA\",3,100,5,228,76034,2997034,1990-02-15
SEA,RDM,\"Seattle, WA\",\"Bend, OR\",2,100,3,228,2997034,76034,1990-02-20
SEA,PDX,\"Seattle, WA\",\"Portland, OR\",950,1000,10,129,2997034,1927881,1990-02-03
";

/// Temporary directory holding a dataset file
pub struct Fixture {
    pub dir: TempDir,
    pub dataset: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        Self::with_contents(FLIGHTS_CSV)
    }

    pub fn with_contents(contents: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let dataset = dir.path().join("flights.csv");
        fs::write(&dataset, contents)?;
        Ok(Self { dir, dataset })
    }

    /// Write a `flightmr.toml` next to the dataset
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join("flightmr.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }
}
