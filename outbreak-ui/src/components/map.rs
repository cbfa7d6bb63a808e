//! Map Component
//!
//! Leaflet tile map with one marker per country. Leaflet is loaded from
//! `index.html` and reached through the global `L` namespace.

use js_sys::{Array, Object, Reflect};
use leptos::*;
use wasm_bindgen::prelude::*;

use outbreak::dashboard::MapView;

#[wasm_bindgen]
extern "C" {
    type MapHandle;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> MapHandle;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &MapHandle, center: &Array, zoom: f64) -> MapHandle;

    #[wasm_bindgen(method)]
    fn remove(this: &MapHandle);

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &MapHandle) -> TileLayer;

    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &MapHandle) -> Marker;
}

fn lat_lng(latitude: f64, longitude: f64) -> Array {
    Array::of2(&latitude.into(), &longitude.into())
}

/// Tile map centered on `map_view.center` with a marker per country
#[component]
pub fn LeafletMap(map_view: MapView) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let handle = store_value(None::<MapHandle>);

    create_effect(move |_| {
        let Some(div) = container.get() else {
            return;
        };
        if handle.with_value(|map| map.is_some()) {
            return;
        }

        let map = create_map(&div);
        map.set_view(
            &lat_lng(map_view.center.latitude, map_view.center.longitude),
            map_view.zoom as f64,
        );

        let options = Object::new();
        let _ = Reflect::set(&options, &"attribution".into(), &map_view.attribution.as_str().into());
        tile_layer(&map_view.tile_url, &options).add_to(&map);

        for m in &map_view.markers {
            marker(&lat_lng(m.latitude, m.longitude))
                .bind_popup(&m.popup.to_html())
                .add_to(&map);
        }

        tracing::debug!(markers = map_view.markers.len(), "Map mounted");
        handle.set_value(Some(map));
    });

    on_cleanup(move || {
        handle.try_update_value(|map| {
            if let Some(map) = map.take() {
                map.remove();
            }
        });
    });

    view! {
        <div node_ref=container class="w-full h-96 rounded-lg" style="height: 60vh;" />
    }
}
