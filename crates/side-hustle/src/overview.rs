use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "overview.html")]
pub struct Overview {
  cells: Vec<Cell>,
  percent: u8,
  next: Option<u8>,
}

pub struct Cell {
  number: u8,
  title: String,
  state: &'static str,
}

impl Page for Overview {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    let days = Api::default().days().await?;

    let store = store()?;

    let cells = days
      .iter()
      .map(|day| Cell {
        number: day.number,
        title: day.title.clone(),
        state: if store.submission(day.number).is_some() {
          "submitted"
        } else if !store.draft(day.number).fields.is_empty() || !store.tasks(day.number).is_empty()
        {
          "started"
        } else {
          "untouched"
        },
      })
      .collect::<Vec<Cell>>();

    let submitted = cells.iter().filter(|cell| cell.state == "submitted").count();

    Ok(Self {
      percent: Day::launch_percent(submitted),
      next: cells
        .iter()
        .find(|cell| cell.state != "submitted")
        .map(|cell| cell.number),
      cells,
    })
  }
}
