use crate::ui::app::App;
use crate::ui::detail::{DetailCard, ProductDetailView};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::{GridCursor, GridEntry, ProductListView, GRID_COLUMNS};
use crate::ui::layout::{centered_rect_by_size, first_visible_row, layout_regions, CARD_HEIGHT};
use crate::ui::login::{LoginField, LoginState};
use crate::ui::navigation::Route;
use crate::ui::theme::{
    ACCENT, BACKGROUND, CARD, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.route();

    frame.render_widget(Header::new().widget(route), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND)),
        body,
    );

    match route {
        Route::Login => draw_login(frame, body, &app.login_state()),
        Route::Home => draw_home(frame, body, &app.list_view(), app.grid_cursor()),
        Route::Detail { .. } => {
            if let Some(view) = app.detail_view() {
                draw_detail(frame, body, &view);
            }
        }
    }

    frame.render_widget(Footer::new().widget(footer, route), footer);

    if let Some(message) = app.alert() {
        draw_alert(frame, area, message);
    }
}

fn draw_login(frame: &mut Frame<'_>, body: Rect, state: &LoginState) {
    let form = centered_rect_by_size(40, 13, body);
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(form);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Welcome!",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        input_box("Username", state.username.clone(), state.focus == LoginField::Username),
        rows[1],
    );
    frame.render_widget(
        input_box(
            "Password",
            state.masked_password(),
            state.focus == LoginField::Password,
        ),
        rows[2],
    );

    let button = state.submit_button();
    let mut button_style = Style::default().fg(BACKGROUND).bg(ACCENT);
    if !button.enabled {
        button_style = Style::default().fg(HEADER_TEXT).bg(CARD);
    }
    if state.focus == LoginField::Submit && button.enabled {
        button_style = button_style.add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(button_style)
            .block(Block::default().borders(Borders::ALL).border_style(button_style)),
        rows[4],
    );
}

fn input_box(label: &'static str, value: String, focused: bool) -> Paragraph<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let line = if value.is_empty() {
        Line::styled(label, Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(value, Style::default().fg(HEADER_TEXT))
    };
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn draw_home(frame: &mut Frame<'_>, body: Rect, view: &ProductListView, cursor: GridCursor) {
    match view {
        ProductListView::Loading => draw_centered(frame, body, "Loading...", ACCENT),
        ProductListView::Error { message } => {
            draw_centered(frame, body, &format!("Error: {}", message), STATUS_ERROR)
        }
        ProductListView::Grid { entries } if entries.is_empty() => {
            draw_centered(frame, body, "No products", MUTED_TEXT)
        }
        ProductListView::Grid { entries } => draw_grid(frame, body, entries, cursor),
    }
}

fn draw_grid(frame: &mut Frame<'_>, body: Rect, entries: &[GridEntry], cursor: GridCursor) {
    let visible_rows = (body.height / CARD_HEIGHT) as usize;
    let first_row = first_visible_row(cursor.row(), visible_rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(body);

    for (offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + offset) * GRID_COLUMNS;
        let Some(row_entries) = entries.get(start..entries.len().min(start + GRID_COLUMNS))
        else {
            break;
        };
        let columns =
            Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);

        for (column, entry) in row_entries.iter().enumerate() {
            let selected = start + column == cursor.selected;
            frame.render_widget(grid_card(entry, selected), columns[column]);
        }
    }
}

fn grid_card(entry: &GridEntry, selected: bool) -> Paragraph<'static> {
    let border = if selected { ACCENT } else { GLOBAL_BORDER };
    let lines = vec![
        Line::styled(
            entry.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(entry.price.clone(), Style::default().fg(MUTED_TEXT)),
        Line::styled(
            entry.image.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ),
    ];
    Paragraph::new(lines).style(Style::default().bg(CARD)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn draw_detail(frame: &mut Frame<'_>, body: Rect, view: &ProductDetailView) {
    match view {
        ProductDetailView::Loading => draw_centered(frame, body, "Loading...", ACCENT),
        ProductDetailView::Error { message } => {
            draw_centered(frame, body, &format!("Error: {}", message), STATUS_ERROR)
        }
        ProductDetailView::NotFound { .. } => {
            draw_centered(frame, body, "Product not found", MUTED_TEXT)
        }
        ProductDetailView::Found(card) => {
            frame.render_widget(detail_card(card), body);
        }
    }
}

fn detail_card(card: &DetailCard) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::styled(
            card.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(card.price.clone(), Style::default().fg(ACCENT)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::styled(card.category.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(card.rating.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(card.image.clone(), label.add_modifier(Modifier::DIM)),
        ]),
        Line::from(""),
        Line::styled(card.description.clone(), text),
    ];
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .style(Style::default().bg(CARD)),
    )
}

fn draw_centered(frame: &mut Frame<'_>, body: Rect, text: &str, color: ratatui::style::Color) {
    let area = centered_rect_by_size(body.width, 1, body);
    frame.render_widget(
        Paragraph::new(Line::styled(text.to_string(), Style::default().fg(color)))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_alert(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).max(24);
    let popup = centered_rect_by_size(width, 5, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
            Line::styled("Enter: OK", Style::default().fg(MUTED_TEXT)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Alert ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
