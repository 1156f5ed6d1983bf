//! Open-Meteo geocoding and current-weather provider.
//! Both endpoints are free and keyless.

use crate::{
    error::{AppError, AppResult},
    models::{CurrentWeather, GeoLocation},
    services::providers::{Geocoder, WeatherSource},
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: ApiCurrentWeather,
}

#[derive(Debug, Deserialize)]
struct ApiCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Clone)]
pub struct OpenMeteoProvider {
    http_client: HttpClient,
    geocoding_url: String,
    weather_url: String,
}

impl OpenMeteoProvider {
    pub fn new(geocoding_url: String, weather_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            geocoding_url,
            weather_url,
        })
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    tracing::warn!(error = %e, provider = "open-meteo", "Request failed");
    AppError::network()
}

#[async_trait::async_trait]
impl Geocoder for OpenMeteoProvider {
    async fn geocode(&self, city: &str) -> AppResult<Option<GeoLocation>> {
        let response = self
            .http_client
            .get(&self.geocoding_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), city = %city, "Geocoding returned error status");
            return Err(AppError::Network(
                "Failed to find city. Please check the spelling and try again.".to_string(),
            ));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid geocoding response: {}", e)))?;

        let location = body
            .results
            .and_then(|results| results.into_iter().next())
            .map(|r| GeoLocation {
                latitude: r.latitude,
                longitude: r.longitude,
                name: r.name,
                country: r.country.unwrap_or_default(),
            });

        tracing::debug!(city = %city, found = location.is_some(), "Geocoding completed");

        Ok(location)
    }
}

#[async_trait::async_trait]
impl WeatherSource for OpenMeteoProvider {
    async fn current_weather(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        let response = self
            .http_client
            .get(&self.weather_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", "celsius".to_string()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Forecast returned error status");
            return Err(AppError::Network(
                "Failed to fetch weather data. Please try again.".to_string(),
            ));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid weather response: {}", e)))?;

        Ok(CurrentWeather {
            temperature_c: body.current_weather.temperature,
            weather_code: body.current_weather.weathercode,
            wind_speed: body.current_weather.windspeed,
        })
    }
}
