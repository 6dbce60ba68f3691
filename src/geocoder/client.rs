use crate::app_config::AppConfig;
use crate::geocoder::GeocoderError;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};

pub fn new_client(config: &AppConfig) -> Result<Client, GeocoderError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.geocoder().user_agent())?);

    let client = Client::builder().default_headers(headers).timeout(config.geocoder().timeout()).build()?;
    Ok(client)
}
