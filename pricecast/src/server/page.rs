use crate::catalog::{Catalog, Feature};
use std::fmt::Write;

fn label(feature: Feature) -> &'static str {
    match feature {
        Feature::Beds => "Bedrooms",
        Feature::Baths => "Bathrooms",
        Feature::Size => "Size (sqft)",
        Feature::ZipCode => "Zip code",
    }
}

fn select(feature: Feature, options: &[f64]) -> String {
    let name = feature.name();
    let mut html = format!(
        "<label for=\"{name}\">{}</label>\n<select id=\"{name}\" name=\"{name}\">\n<option value=\"\">Select {}</option>\n",
        label(feature),
        label(feature).to_lowercase()
    );
    for value in options {
        let _ = writeln!(html, "<option value=\"{value}\">{value}</option>");
    }
    html.push_str("</select>\n");
    html
}

/// Renders the estimate form with one drop-down per feature.
pub fn render_index(catalog: &Catalog) -> String {
    let fields: String = Feature::ALL
        .iter()
        .map(|&f| select(f, catalog.options(f)))
        .collect();

    INDEX_TEMPLATE.replace("{{fields}}", &fields)
}

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>House Price Predictor</title>
    <style>
        body { font-family: sans-serif; max-width: 32rem; margin: 3rem auto; }
        label { display: block; margin-top: 1rem; }
        select, button { width: 100%; padding: 0.4rem; }
        button { margin-top: 1.5rem; }
        #prediction { margin-top: 1.5rem; font-weight: bold; }
    </style>
</head>
<body>
    <h1>House Price Predictor</h1>
    <form id="predict-form" method="post" action="/predict">
{{fields}}
        <button type="submit">Predict price</button>
    </form>
    <div id="prediction"></div>
    <script>
        document.getElementById("predict-form").addEventListener("submit", async (event) => {
            event.preventDefault();
            const body = new URLSearchParams(new FormData(event.target));
            const response = await fetch("/predict", { method: "POST", body });
            document.getElementById("prediction").textContent = await response.text();
        });
    </script>
</body>
</html>
"#;
