use crate::domain::detail::SITE_NAME;
use maud::{html, Markup, DOCTYPE};

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/index.html#directory" { "Directory" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p class="muted" { "Listings are admin curated. Verify details before visiting." }
                }
            }
        }
    }
}
