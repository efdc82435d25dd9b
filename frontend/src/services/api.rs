use gloo::net::http::Request;
use shared::YearDataResponse;

/// Client for the holiday/leave provider
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn year_url(&self, year: i32) -> String {
        format!("{}/calendar/{}", self.base_url, year)
    }

    /// Holidays and leaves for a whole year
    pub async fn get_year_data(&self, year: i32) -> Result<YearDataResponse, String> {
        let url = self.year_url(year);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch calendar data: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "Calendar provider returned {} {}",
                response.status(),
                response.status_text()
            ));
        }

        let data = response
            .json::<YearDataResponse>()
            .await
            .map_err(|e| format!("Failed to parse calendar data: {}", e))?;

        if data.year != year {
            return Err(format!("Asked for {} but provider answered {}", year, data.year));
        }

        Ok(data)
    }
}
