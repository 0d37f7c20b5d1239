use gtts_shared::error::GeoError;
use gtts_shared::models::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError, PositionOptions};

/// Give up after this long instead of waiting on the platform.
const TIMEOUT_MS: u32 = 10_000;

/// Accept a fix this old instead of waking the GPS again.
const MAX_AGE_MS: u32 = 60_000;

/// One-shot, high-accuracy position query.
pub async fn current_position() -> Result<Coordinate, GeoError> {
    let window = web_sys::window().ok_or(GeoError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeoError::Unsupported)?;

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(TIMEOUT_MS);
    options.set_maximum_age(MAX_AGE_MS);

    let mut request_failed = false;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        request_failed = geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &options,
            )
            .is_err();
    });
    if request_failed {
        return Err(GeoError::Unsupported);
    }

    match JsFuture::from(promise).await {
        Ok(value) => {
            let coords = value.unchecked_into::<Position>().coords();
            Ok(Coordinate::new(coords.latitude(), coords.longitude()))
        }
        // Modern browsers name the class GeolocationPositionError, so skip
        // the instanceof check and read `code` directly.
        Err(error) => Err(GeoError::from_code(
            error.unchecked_into::<PositionError>().code(),
        )),
    }
}
