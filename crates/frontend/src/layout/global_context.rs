use contracts::domain::common::EntityId;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Screen currently shown in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Items,
    Consumables,
    Consumable(EntityId),
    Patrimonies,
    Patrimony(EntityId),
    Tags,
    Statuses,
    Units,
    QrCodes,
    QrCode(EntityId),
}

/// `?view=…&id=…` as mirrored into the address bar
#[derive(Debug, Default, Serialize, Deserialize)]
struct RouteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<EntityId>,
}

impl Route {
    fn view_name(&self) -> &'static str {
        match self {
            Route::Items => "items",
            Route::Consumables => "consumables",
            Route::Consumable(_) => "consumable",
            Route::Patrimonies => "patrimonies",
            Route::Patrimony(_) => "patrimony",
            Route::Tags => "tags",
            Route::Statuses => "statuses",
            Route::Units => "units",
            Route::QrCodes => "qrcodes",
            Route::QrCode(_) => "qrcode",
        }
    }

    fn id(&self) -> Option<EntityId> {
        match self {
            Route::Consumable(id) | Route::Patrimony(id) | Route::QrCode(id) => Some(*id),
            _ => None,
        }
    }

    fn from_parts(view: &str, id: Option<EntityId>) -> Option<Route> {
        let route = match (view, id) {
            ("items", _) => Route::Items,
            ("consumables", _) => Route::Consumables,
            ("consumable", Some(id)) => Route::Consumable(id),
            ("patrimonies", _) => Route::Patrimonies,
            ("patrimony", Some(id)) => Route::Patrimony(id),
            ("tags", _) => Route::Tags,
            ("statuses", _) => Route::Statuses,
            ("units", _) => Route::Units,
            ("qrcodes", _) => Route::QrCodes,
            ("qrcode", Some(id)) => Route::QrCode(id),
            _ => return None,
        };
        Some(route)
    }

    pub fn to_query(&self) -> String {
        let query = RouteQuery {
            view: Some(self.view_name().to_string()),
            id: self.id(),
        };
        serde_qs::to_string(&query).unwrap_or_default()
    }

    /// Parse a location search string; `None` when it names no known screen
    pub fn from_query(search: &str) -> Option<Route> {
        let query: RouteQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
        Route::from_parts(query.view.as_deref()?, query.id)
    }

    /// Parse entity links such as `/consumables/12` (the form encoded in QR codes)
    pub fn from_path(path: &str) -> Option<Route> {
        let mut segments = path.trim_matches('/').split('/');
        let collection = segments.next()?;
        let id = match segments.next() {
            Some(raw) => Some(raw.parse::<EntityId>().ok()?),
            None => None,
        };
        if segments.next().is_some() {
            return None;
        }
        match (collection, id) {
            ("consumables", Some(id)) => Some(Route::Consumable(id)),
            ("patrimonies", Some(id)) => Some(Route::Patrimony(id)),
            ("qrcodes", Some(id)) => Some(Route::QrCode(id)),
            (view, None) => Route::from_parts(view, None),
            _ => None,
        }
    }

    /// List screen a detail screen returns to
    pub fn list(&self) -> Route {
        match self {
            Route::Consumable(_) => Route::Consumables,
            Route::Patrimony(_) => Route::Patrimonies,
            Route::QrCode(_) => Route::QrCodes,
            other => *other,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Items => "Items",
            Route::Consumables | Route::Consumable(_) => "Consumables",
            Route::Patrimonies | Route::Patrimony(_) => "Patrimonies",
            Route::Tags => "Tags",
            Route::Statuses => "Statuses",
            Route::Units => "Units",
            Route::QrCodes | Route::QrCode(_) => "QR codes",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {route:?}");
        let _ = self.route.try_set(route);
    }

    /// Leave a detail screen for its list
    pub fn back_to_list(&self) {
        let list = self.route.with_untracked(|r| r.list());
        self.navigate(list);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Restore the route from the address bar and keep the address bar in sync afterwards
    pub fn init_url_sync(&self) {
        let location = window().map(|w| w.location());
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        let path = location
            .as_ref()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_default();

        if let Some(route) = Route::from_query(&search).or_else(|| Route::from_path(&path)) {
            self.route.set(route);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = format!("/?{}", this.route.get().to_query());

            let current = window()
                .map(|w| {
                    let l = w.location();
                    format!(
                        "{}{}",
                        l.pathname().unwrap_or_default(),
                        l.search().unwrap_or_default()
                    )
                })
                .unwrap_or_default();

            if current != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        for route in [
            Route::Items,
            Route::Consumable(12),
            Route::Patrimonies,
            Route::QrCode(3),
            Route::Units,
        ] {
            assert_eq!(Route::from_query(&route.to_query()), Some(route));
        }
        assert_eq!(Route::Consumable(12).to_query(), "view=consumable&id=12");
        assert_eq!(Route::Tags.to_query(), "view=tags");
    }

    #[test]
    fn test_from_query_rejects_unknown_or_incomplete() {
        assert_eq!(Route::from_query(""), None);
        assert_eq!(Route::from_query("?view=nope"), None);
        assert_eq!(Route::from_query("?view=patrimony"), None);
        assert_eq!(Route::from_query("?view=statuses"), Some(Route::Statuses));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/consumables/12"), Some(Route::Consumable(12)));
        assert_eq!(Route::from_path("/patrimonies/4/"), Some(Route::Patrimony(4)));
        assert_eq!(Route::from_path("/tags"), Some(Route::Tags));
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path("/consumables/x"), None);
        assert_eq!(Route::from_path("/tags/1"), None);
    }

    #[test]
    fn test_detail_returns_to_list() {
        assert_eq!(Route::Consumable(1).list(), Route::Consumables);
        assert_eq!(Route::QrCode(1).list(), Route::QrCodes);
        assert_eq!(Route::Tags.list(), Route::Tags);
    }
}
