//! One-shot device position lookup.

use thiserror::Error;

use crate::core::format::format_coordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Form strings, four decimals each.
    pub fn to_form_values(self) -> (String, String) {
        (
            format_coordinate(self.latitude),
            format_coordinate(self.longitude),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available on this platform")]
    Unavailable,
    #[error("permission to read the location was denied")]
    Denied,
    #[error("location lookup failed: {0}")]
    Failed(String),
}

/// Ask the platform for the current position.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    #[cfg(target_arch = "wasm32")]
    {
        web::current_position().await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("geolocation requested on a native build");
        Err(GeolocationError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{Coordinates, GeolocationError};

    type Reply = Result<Coordinates, GeolocationError>;

    // PositionError.PERMISSION_DENIED
    const PERMISSION_DENIED: f64 = 1.0;

    fn number_at(target: &JsValue, key: &str) -> Option<f64> {
        js_sys::Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
    }

    fn parse_position(position: &JsValue) -> Reply {
        let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords"))
            .map_err(|_| GeolocationError::Failed("position has no coords".into()))?;
        match (number_at(&coords, "latitude"), number_at(&coords, "longitude")) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(GeolocationError::Failed("position coords are not numeric".into())),
        }
    }

    fn parse_error(error: &JsValue) -> GeolocationError {
        if number_at(error, "code") == Some(PERMISSION_DENIED) {
            return GeolocationError::Denied;
        }
        let message = js_sys::Reflect::get(error, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "unknown error".to_string());
        GeolocationError::Failed(message)
    }

    pub(super) async fn current_position() -> Reply {
        let geolocation = web_sys::window()
            .ok_or(GeolocationError::Unavailable)?
            .navigator()
            .geolocation()
            .map_err(|_| GeolocationError::Unavailable)?;

        let (tx, rx) = oneshot::channel::<Reply>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let tx = tx.clone();
            Closure::once_into_js(move |position: JsValue| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(parse_position(&position));
                }
            })
        };
        let on_error = {
            let tx = tx.clone();
            Closure::once_into_js(move |error: JsValue| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(parse_error(&error)));
                }
            })
        };

        geolocation
            .get_current_position_with_error_callback(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            )
            .map_err(|err| GeolocationError::Failed(format!("{err:?}")))?;

        rx.await
            .unwrap_or_else(|_| Err(GeolocationError::Failed("lookup was dropped".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_use_four_decimals() {
        let (lat, lon) = Coordinates::new(28.613939, 77.209021).to_form_values();
        assert_eq!(lat, "28.6139");
        assert_eq!(lon, "77.2090");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn native_builds_report_unavailable() {
        assert_eq!(current_position().await, Err(GeolocationError::Unavailable));
    }
}
