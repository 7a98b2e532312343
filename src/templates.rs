use maud::{DOCTYPE, Markup, html};

const APP_TITLE: &str = "Reelbox movie catalogue";

pub fn index_page() -> String {
    page(
        APP_TITLE,
        html! {
            h1 { (APP_TITLE) }
            p { "JSON API for browsing and curating movies. Version " (env!("CARGO_PKG_VERSION")) "." }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
    .into_string()
}
