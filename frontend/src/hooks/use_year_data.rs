use shared::{DialogIcon, YearDataResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_dialogs::DialogHandle;
use crate::services::api::ApiClient;
use crate::services::date_utils::current_year;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct YearDataState {
    pub year: i32,
    pub data: Option<YearDataResponse>,
    pub loading: bool,
}

impl YearDataState {
    /// Loaded data for the displayed year, or an undecorated year while
    /// loading or after a failure. A response for another year is ignored.
    pub fn data_or_empty(&self) -> YearDataResponse {
        match &self.data {
            Some(data) if data.year == self.year => data.clone(),
            _ => YearDataResponse::empty(self.year),
        }
    }
}

pub struct UseYearDataResult {
    pub state: YearDataState,
    pub actions: UseYearDataActions,
}

#[derive(Clone, PartialEq)]
pub struct UseYearDataActions {
    pub prev_year: Callback<MouseEvent>,
    pub next_year: Callback<MouseEvent>,
    pub this_year: Callback<MouseEvent>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_year_data(api_client: &ApiClient, dialogs: &DialogHandle) -> UseYearDataResult {
    let year = use_state(current_year);
    let data = use_state(|| Option::<YearDataResponse>::None);
    let loading = use_state(|| false);
    // Year of the latest request; older responses are dropped
    let requested = use_mut_ref(|| 0i32);

    let reload = {
        let api_client = api_client.clone();
        let dialogs = dialogs.clone();
        let year = year.clone();
        let data = data.clone();
        let loading = loading.clone();
        let requested = requested.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let dialogs = dialogs.clone();
            let data = data.clone();
            let loading = loading.clone();
            let requested = requested.clone();
            let year = *year;

            *requested.borrow_mut() = year;
            loading.set(true);
            let loading_id = dialogs.loading(&format!("Loading {}...", year));

            spawn_local(async move {
                let result = api_client.get_year_data(year).await;

                if let Some(id) = loading_id {
                    dialogs.close(id);
                }
                if *requested.borrow() != year {
                    Logger::debug_with_component("year-data", &format!("Dropping stale response for {}", year));
                    return;
                }

                match result {
                    Ok(response) => {
                        Logger::info_with_component(
                            "year-data",
                            &format!(
                                "Loaded {}: {} holidays, {} leaves",
                                year,
                                response.holidays.len(),
                                response.leaves.len()
                            ),
                        );
                        dialogs.toast(&format!("{} loaded", year), DialogIcon::Success);
                        data.set(Some(response));
                    }
                    Err(e) => {
                        Logger::error_with_component("year-data", &e);
                        dialogs.error(&e);
                        data.set(None);
                    }
                }
                loading.set(false);
            });
        })
    };

    let prev_year = {
        let year = year.clone();
        Callback::from(move |_: MouseEvent| year.set(*year - 1))
    };

    let next_year = {
        let year = year.clone();
        Callback::from(move |_: MouseEvent| year.set(*year + 1))
    };

    let this_year = {
        let year = year.clone();
        Callback::from(move |_: MouseEvent| year.set(current_year()))
    };

    // Fetch whenever the year changes
    use_effect_with(*year, {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    let state = YearDataState {
        year: *year,
        data: (*data).clone(),
        loading: *loading,
    };

    let actions = UseYearDataActions {
        prev_year,
        next_year,
        this_year,
        reload,
    };

    UseYearDataResult { state, actions }
}
