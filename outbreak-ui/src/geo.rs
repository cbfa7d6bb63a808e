//! Browser Geolocation
//!
//! `navigator.geolocation.getCurrentPosition` wrapped as a `PositionSource`.
//! The success and error callbacks each fire at most once; whichever runs
//! first completes a oneshot channel the future awaits. Neither fires while
//! the permission prompt is open, so callers bound the wait themselves
//! (`DashboardLoader::load_within`).

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Geolocation, Position, PositionOptions};

use outbreak::stats::{PositionError, PositionSource, UserPosition};

type PositionResult = Result<UserPosition, PositionError>;

/// Asks the browser once for the current position
#[derive(Debug, Clone, Copy)]
pub struct BrowserGeolocation {
    /// Browser-side timeout, counted from permission being granted
    pub timeout_ms: u32,
}

#[async_trait(?Send)]
impl PositionSource for BrowserGeolocation {
    async fn current_position(&self) -> PositionResult {
        let geolocation = geolocation().ok_or(PositionError::Unsupported)?;

        let (tx, rx) = oneshot::channel::<PositionResult>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let tx = Rc::clone(&tx);
            Closure::once_into_js(move |position: Position| {
                let coords = position.coords();
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Ok(UserPosition::geolocated(
                        coords.latitude(),
                        coords.longitude(),
                    )));
                }
            })
        };

        let on_error = {
            let tx = Rc::clone(&tx);
            Closure::once_into_js(move |error: web_sys::PositionError| {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(PositionError::from_code(error.code(), &error.message())));
                }
            })
        };

        let options = PositionOptions::new();
        options.set_timeout(self.timeout_ms);
        options.set_maximum_age(0);

        geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &options,
            )
            .map_err(|e| PositionError::Other(format!("{:?}", e)))?;

        rx.await
            .unwrap_or_else(|_| Err(PositionError::Other("callback dropped".to_string())))
    }
}

/// `navigator.geolocation`, when the browser exposes one
fn geolocation() -> Option<Geolocation> {
    let geolocation = web_sys::window()?.navigator().geolocation().ok()?;
    if geolocation.is_undefined() || geolocation.is_null() {
        None
    } else {
        Some(geolocation)
    }
}
