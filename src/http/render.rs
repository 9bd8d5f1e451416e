//! HTML rendering for the listing view

use minijinja::Environment;
use serde::Serialize;

use crate::store::DropSummary;

/// The listing mapping returned by `GET /drop`.
///
/// Computed once per request; content negotiation then picks either this
/// value as a JSON body or the rendered HTML page.
#[derive(Debug, Serialize)]
pub struct DropListing {
    pub drops: Vec<DropSummary>,
}

const LIST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Drops</title>
  </head>
  <body>
    <h1>Drops</h1>
    <table>
      <tr><th>id</th><th>time</th></tr>
      {%- for drop in drops %}
      <tr><td><a href="/drop/{{ drop.id }}">{{ drop.id }}</a></td><td>{{ drop.time }}</td></tr>
      {%- endfor %}
    </table>
  </body>
</html>
"#;

/// Render the listing as an HTML page
pub fn render_listing(listing: &DropListing) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("list", LIST_TEMPLATE)?;
    env.get_template("list")?.render(listing)
}
