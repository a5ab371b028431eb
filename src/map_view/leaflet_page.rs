use crate::domain::Coordinate;
use crate::map_view::map_view::MAX_ZOOM;
use crate::map_view::{MapView, MapViewError, Presenter, PresenterError, ViewHandle};
use serde::Serialize;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

/// Builds a standalone HTML page that lets Leaflet render the recorded views in the browser.
#[derive(Debug, Default)]
pub struct LeafletPage {
    title: String,
    views: Vec<View>,
    elements: Vec<Element>,
    alerts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct View {
    container_id: String,
    center: Coordinate,
    zoom: u8,
    tile_layers: Vec<TileLayer>,
    markers: Vec<Marker>,
    polylines: Vec<Polyline>,
}

#[derive(Debug, Serialize)]
struct TileLayer {
    url_template: String,
    attribution: String,
}

#[derive(Debug, Serialize)]
struct Marker {
    at: Coordinate,
    popup: String,
    open_popup: bool,
}

#[derive(Debug, Serialize)]
struct Polyline {
    points: Vec<Coordinate>,
    color: String,
}

#[derive(Debug)]
struct Element {
    id: String,
    text: String,
}

const SCRIPT: &str = r#"
    for (const view of views) {
      const map = L.map(view.container_id).setView([view.center.latitude, view.center.longitude], view.zoom);
      for (const layer of view.tile_layers) {
        L.tileLayer(layer.url_template, { attribution: layer.attribution }).addTo(map);
      }
      for (const marker of view.markers) {
        const m = L.marker([marker.at.latitude, marker.at.longitude]).addTo(map).bindPopup(marker.popup);
        if (marker.open_popup) {
          m.openPopup();
        }
      }
      for (const line of view.polylines) {
        L.polyline(line.points.map((p) => [p.latitude, p.longitude]), { color: line.color }).addTo(map);
      }
    }
    for (const message of alerts) {
      alert(message);
    }
"#;

impl LeafletPage {
    pub fn new(title: impl Into<String>) -> Self {
        LeafletPage {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Declares an empty text element, only declared elements can receive text.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.push(Element {
            id: id.into(),
            text: String::new(),
        });
        self
    }

    #[cfg(test)]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    #[cfg(test)]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[cfg(test)]
    pub fn text_of(&self, element_id: &str) -> Option<&str> {
        self.elements.iter().find(|e| e.id == element_id).map(|e| e.text.as_str())
    }

    fn view_mut(&mut self, view: ViewHandle) -> Result<&mut View, MapViewError> {
        self.views.get_mut(view.0).ok_or(MapViewError::UnknownView(view))
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        let views = script_json(&self.views)?;
        let alerts = script_json(&self.alerts)?;

        let containers = self
            .views
            .iter()
            .map(|view| format!("  <div id=\"{}\" class=\"map\"></div>\n", escape_html(&view.container_id)));
        let elements = self
            .elements
            .iter()
            .map(|element| format!("  <p id=\"{}\">{}</p>\n", escape_html(&element.id), escape_html(&element.text)));
        let body: String = containers.chain(elements).collect();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="">
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    .map {{ height: 480px; }}
  </style>
</head>
<body>
{body}  <script>
    const views = {views};
    const alerts = {alerts};
{SCRIPT}  </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
        ))
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn write_to(&self, path: &Path) -> io::Result<()> {
        info!("📄 Writing page...");
        let html = self.render().map_err(io::Error::other)?;
        fs::write(path, html).await?;
        info!("📄 Writing page... OK");
        Ok(())
    }
}

impl MapView for LeafletPage {
    fn create_view(&mut self, container_id: &str, center: Coordinate, zoom: u8) -> Result<ViewHandle, MapViewError> {
        if zoom > MAX_ZOOM {
            return Err(MapViewError::InvalidZoom(zoom));
        }

        if self.views.iter().any(|v| v.container_id == container_id) {
            return Err(MapViewError::ContainerAlreadyInitialized(container_id.to_string()));
        }

        self.views.push(View {
            container_id: container_id.to_string(),
            center,
            zoom,
            tile_layers: Vec::new(),
            markers: Vec::new(),
            polylines: Vec::new(),
        });

        let handle = ViewHandle(self.views.len() - 1);
        debug!(container_id, %handle, "🗺️ Created map view");
        Ok(handle)
    }

    fn add_tile_layer(&mut self, view: ViewHandle, url_template: &str, attribution: &str) -> Result<(), MapViewError> {
        self.view_mut(view)?.tile_layers.push(TileLayer {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
        });
        Ok(())
    }

    fn add_marker(&mut self, view: ViewHandle, at: Coordinate, popup: &str, open_popup: bool) -> Result<(), MapViewError> {
        self.view_mut(view)?.markers.push(Marker {
            at,
            popup: popup.to_string(),
            open_popup,
        });
        Ok(())
    }

    fn add_polyline(&mut self, view: ViewHandle, points: &[Coordinate], color: &str) -> Result<(), MapViewError> {
        if points.len() < 2 {
            return Err(MapViewError::IncompletePolyline(points.len()));
        }

        self.view_mut(view)?.polylines.push(Polyline {
            points: points.to_vec(),
            color: color.to_string(),
        });
        Ok(())
    }
}

impl Presenter for LeafletPage {
    fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), PresenterError> {
        let element = self
            .elements
            .iter_mut()
            .find(|e| e.id == element_id)
            .ok_or_else(|| PresenterError::UnknownElement(element_id.to_string()))?;

        element.text = text.to_string();
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        warn!("🚨 {}", message);
        self.alerts.push(message.to_string());
    }
}

/// JSON is valid JavaScript, but `</script>` inside a string would still end the script element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
