use rand::Rng;
use rand::seq::SliceRandom;
use tracing_subscriber::EnvFilter;
use webby::App;
use webby::config::Config;
use webby::middleware::{RequestLogger, serve_static};

const HOME_PAGE: &str = r#"<html>
<head>
<link rel="stylesheet" href="/css/styles.css">
</head>
<body>
<h1>Dogs Are THE BEST</h1>
<a href="/gallery">Let's see some cute doggies</a>
</body>
</html>"#;

// Placeholder art ships as SVG so the repository carries no binary assets;
// dropping real photos in as animalN.jpg only needs these paths changed.
static ANIMALS: [&str; 4] = [
    "/img/animal1.svg",
    "/img/animal2.svg",
    "/img/animal3.svg",
    "/img/animal4.svg",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut app = App::new();
    app.use_middleware(RequestLogger)
        .use_middleware(serve_static(cfg.static_files.root.clone()));

    app.get("/", |_req, mut res| async move {
        res.set("Content-Type", "text/html");
        res.status(200).send(HOME_PAGE).await
    });

    app.get("/gallery", |_req, mut res| async move {
        res.set("Content-Type", "text/html");
        res.status(200).send(gallery_page()).await
    });

    app.get("/pics", |_req, mut res| async move {
        res.redirect(301, "/gallery").await
    });

    tokio::select! {
        res = app.listen_on(&cfg.server.listen_addr) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn gallery_page() -> String {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(1..=4);
    let heading = match count {
        1 => "Here is A dog!",
        2 => "Here are TOO dogs!",
        3 => "Here are TREE dogs!",
        _ => "Here are FOR dogs!",
    };

    let pics: String = (0..count)
        .filter_map(|_| ANIMALS.choose(&mut rng))
        .map(|animal| format!(r#"<img src="{animal}">"#))
        .collect();

    format!(
        r#"<html><head><link rel="stylesheet" href="/css/styles.css"></head><body><h1>{heading}</h1>{pics}</body></html>"#
    )
}
