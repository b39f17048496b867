use anyhow::Result;
use schemars::schema_for;
use widgets_api::{ErrorMessage, Widget};

macro_rules! write_schema {
    ($model:ty, $name:expr) => {{
        let schema = schema_for!($model);
        let output = serde_json::to_string_pretty(&schema)?;
        std::fs::write(format!("../schemas/{}.json", $name), output)?;
    }};
}

fn main() -> Result<()> {
    std::fs::create_dir_all("../schemas")?;
    write_schema!(Widget, "widget");
    write_schema!(Vec<Widget>, "widgets");
    write_schema!(ErrorMessage, "error");
    Ok(())
}
