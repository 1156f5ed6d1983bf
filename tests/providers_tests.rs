//! HTTP-level tests for the OMDb and Open-Meteo providers using WireMock

use std::time::Duration;

use moviecast::{
    error::AppError,
    services::providers::{
        omdb::OmdbProvider, open_meteo::OpenMeteoProvider, CatalogError, Geocoder, MovieCatalog,
        WeatherSource,
    },
};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TIMEOUT: Duration = Duration::from_secs(5);

fn omdb(server: &MockServer) -> OmdbProvider {
    OmdbProvider::new("test_key".to_string(), format!("{}/", server.uri()), TIMEOUT).unwrap()
}

fn open_meteo(server: &MockServer) -> OpenMeteoProvider {
    OpenMeteoProvider::new(
        format!("{}/v1/search", server.uri()),
        format!("{}/v1/forecast", server.uri()),
        TIMEOUT,
    )
    .unwrap()
}

// =============================================================================
// OMDb
// =============================================================================

#[tokio::test]
async fn test_omdb_search_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test_key"))
        .and(query_param("s", "john wick"))
        .and(query_param("type", "movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Search": [
                {"Title": "John Wick", "Year": "2014", "imdbID": "tt2911666", "Type": "movie", "Poster": "https://img/jw.jpg"},
                {"Title": "John Wick: Chapter 2", "Year": "2017", "imdbID": "tt4425200", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = omdb(&server).search_movies("john wick").await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, "tt2911666");
    assert_eq!(movies[1].poster_url, "N/A");
}

#[tokio::test]
async fn test_omdb_not_found_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Response": "False", "Error": "Movie not found!"})),
        )
        .mount(&server)
        .await;

    let result = omdb(&server).search_movies("zzzz").await;
    assert_eq!(
        result,
        Err(CatalogError::NoMatch("Movie not found!".to_string()))
    );
}

#[tokio::test]
async fn test_omdb_status_classification() {
    let cases = [
        (401, CatalogError::Unauthorized),
        (429, CatalogError::RateLimited),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        assert_eq!(omdb(&server).search_movies("up").await, Err(expected));
    }
}

#[tokio::test]
async fn test_omdb_server_error_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = omdb(&server).search_movies("up").await;
    assert!(matches!(result, Err(CatalogError::Transient(_))));
}

#[tokio::test]
async fn test_omdb_unreachable_is_transient() {
    let provider = OmdbProvider::new(
        "test_key".to_string(),
        "http://127.0.0.1:9/".to_string(),
        Duration::from_millis(500),
    )
    .unwrap();

    let result = provider.search_movies("up").await;
    assert!(matches!(result, Err(CatalogError::Transient(_))));
}

// =============================================================================
// Open-Meteo
// =============================================================================

#[tokio::test]
async fn test_geocode_first_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": 2988507, "name": "Paris", "latitude": 48.85341, "longitude": 2.3488, "country": "France"}
            ]
        })))
        .mount(&server)
        .await;

    let location = open_meteo(&server).geocode("Paris").await.unwrap().unwrap();
    assert_eq!(location.name, "Paris");
    assert_eq!(location.country, "France");
    assert!((location.latitude - 48.85341).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.3})))
        .mount(&server)
        .await;

    assert_eq!(open_meteo(&server).geocode("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_geocode_error_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = open_meteo(&server).geocode("Paris").await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_current_weather() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("temperature_unit", "celsius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 48.86,
            "longitude": 2.35,
            "current_weather": {
                "temperature": 22.0,
                "windspeed": 11.2,
                "winddirection": 250,
                "weathercode": 1,
                "time": "2024-06-01T12:00"
            }
        })))
        .mount(&server)
        .await;

    let weather = open_meteo(&server)
        .current_weather(48.86, 2.35)
        .await
        .unwrap();
    assert_eq!(weather.weather_code, 1);
    assert_eq!(weather.temperature_c, 22.0);
    assert_eq!(weather.wind_speed, 11.2);
}

#[tokio::test]
async fn test_current_weather_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let result = open_meteo(&server).current_weather(0.0, 0.0).await;
    assert!(matches!(result, Err(AppError::Network(msg)) if msg.contains("weather data")));
}
