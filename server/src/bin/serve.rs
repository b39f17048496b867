use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use structopt::StructOpt;
use widgets_api::Widget;
use widgets_server::{
    resource::WidgetsResource,
    routes,
    store::{MemoryStore, WidgetStore},
};

#[derive(StructOpt, Debug)]
#[structopt(name = "serve", about = "Serve the widget collection over HTTP")]
struct Opt {
    /// Address to listen on
    #[structopt(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Widget to seed the store with, may be repeated
    #[structopt(long = "widget")]
    widgets: Vec<String>,

    /// Start without a widget collection
    #[structopt(long)]
    unprovisioned: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();

    let store: Arc<dyn WidgetStore> = if opt.unprovisioned {
        Arc::new(MemoryStore::unprovisioned())
    } else {
        Arc::new(MemoryStore::with_widgets(
            opt.widgets.into_iter().map(Widget::new),
        ))
    };
    let app = routes::router(Arc::new(WidgetsResource::new(store)));

    tracing::debug!("listening on {}", opt.addr);

    axum::Server::bind(&opt.addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
