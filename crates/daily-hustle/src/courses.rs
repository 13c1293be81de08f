use super::*;

#[derive(Boilerplate)]
#[boilerplate(filename = "courses.html")]
pub struct Courses {
  catalog: Vec<Course>,
  filtered: Vec<Course>,
}

impl Courses {
  fn grid(filtered: &[Course]) -> String {
    if filtered.is_empty() {
      EmptyState {
        title: "No courses found",
        text: "Try adjusting your filters.",
      }
      .to_string()
    } else {
      filtered
        .iter()
        .map(|course| CourseCard { course }.to_string())
        .collect()
    }
  }
}

impl Page for Courses {
  async fn initialize(_params: Params) -> Result<Self, Error> {
    let catalog = Api::default().courses().await?;

    let filtered = Filter::default().apply(&catalog);

    Ok(Self { catalog, filtered })
  }

  fn connected(&self, root: &Element) {
    let search = root.select::<HtmlInputElement>("#search-input");
    let category = root.select::<HtmlSelectElement>("#filter-category");
    let level = root.select::<HtmlSelectElement>("#filter-level");
    let price = root.select::<HtmlSelectElement>("#filter-price");
    let sort = root.select::<HtmlSelectElement>("#filter-sort");
    let grid = root.select::<Element>("#courses-grid");
    let count = root.select::<Element>("#course-count");

    let update: Rc<dyn Fn()> = {
      let catalog = self.catalog.clone();
      let search = search.clone();
      let category = category.clone();
      let level = level.clone();
      let price = price.clone();
      let sort = sort.clone();

      Rc::new(move || {
        let filter = Filter {
          search: search.value(),
          category: category.value().parse().ok(),
          level: level.value().parse().ok(),
          price: price.value().parse().ok(),
          format: None,
          sort: sort.value().parse().ok(),
        };

        let filtered = filter.apply(&catalog);

        count.set_text_content(Some(&filtered.len().to_string()));
        grid.set_inner_html(&Self::grid(&filtered));
      })
    };

    {
      let update = update.clone();
      let pending = Rc::new(RefCell::new(None::<Timeout>));
      search.listen("input", move |_: Event| {
        let update = update.clone();
        // replacing the pending timeout drops, and thereby cancels, the old one
        *pending.borrow_mut() = Some(Timeout::new(300, move || update()));
      });
    }

    for dropdown in [category.clone(), level, price, sort] {
      let update = update.clone();
      dropdown.listen("change", move |_: Event| update());
    }

    for tag in root.select_all::<HtmlElement>(".category-tag") {
      let name = tag.get_attribute("data-category").unwrap_or_default();
      let category = category.clone();
      let update = update.clone();
      tag.listen("click", move |event: Event| {
        event.prevent_default();
        category.set_value(&name);
        update();
      });
    }
  }
}
