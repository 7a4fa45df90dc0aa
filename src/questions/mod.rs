//! Analytical questions over the flight dataset
//!
//! Each question is a map transform plus an aggregate handed to the
//! [`mapreduce`](crate::mapreduce) engine.

pub mod connections;
pub mod empty_flights;
pub mod top_flights;

pub use connections::{CityPair, Connections, PairFlights};
pub use empty_flights::{EmptyFlights, OccupancyRate};
pub use top_flights::TopFlights;

use crate::error::Result;
use crate::source::Dataset;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::info;

pub const PASSENGERS: &str = "Passengers";
pub const SEATS: &str = "Seats";
pub const FLIGHTS: &str = "Flights";
pub const ORIGIN_CITY: &str = "Origin_city";
pub const DESTINATION_CITY: &str = "Destination_city";
pub const DESTINATION_AIRPORT: &str = "Destination_airport";
pub const FLY_DATE: &str = "Fly_date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    EmptyFlights,
    TopAirports,
    TopCities,
    Connections,
}

impl Question {
    pub const ALL: [Question; 4] = [
        Question::EmptyFlights,
        Question::TopAirports,
        Question::TopCities,
        Question::Connections,
    ];
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EmptyFlights => "empty-flights",
            Self::TopAirports => "top-airports",
            Self::TopCities => "top-cities",
            Self::Connections => "connections",
        };
        f.write_str(name)
    }
}

/// Tunables shared by the questions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionSettings {
    pub empty_threshold: f64,
    pub top_n: usize,
}

impl Default for QuestionSettings {
    fn default() -> Self {
        Self {
            empty_threshold: empty_flights::DEFAULT_THRESHOLD,
            top_n: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "question", rename_all = "snake_case")]
pub enum Answer {
    EmptyFlights(EmptyFlights),
    TopAirports(TopFlights),
    TopCities(TopFlights),
    Connections(Connections),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFlights(a) => fmt::Display::fmt(a, f),
            Self::TopAirports(a) | Self::TopCities(a) => fmt::Display::fmt(a, f),
            Self::Connections(a) => fmt::Display::fmt(a, f),
        }
    }
}

/// Answer one question with a fresh row source from `dataset`
pub fn answer(question: Question, dataset: &Dataset, settings: &QuestionSettings) -> Result<Answer> {
    info!("Answering {} from {}", question, dataset.path().display());
    let started = Instant::now();
    let rows = dataset.rows()?;

    let answer = match question {
        Question::EmptyFlights => {
            Answer::EmptyFlights(empty_flights::run(rows, settings.empty_threshold)?)
        }
        Question::TopAirports => Answer::TopAirports(top_flights::run(
            rows,
            DESTINATION_AIRPORT,
            settings.top_n,
        )?),
        Question::TopCities => {
            Answer::TopCities(top_flights::run(rows, DESTINATION_CITY, settings.top_n)?)
        }
        Question::Connections => Answer::Connections(connections::run(rows, settings.top_n)?),
    };

    info!("Answered {} in {:?}", question, started.elapsed());
    Ok(answer)
}
