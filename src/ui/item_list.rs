use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::messages::Message;
use crate::app::domain::swatch::{Hue, Swatch};
use crate::app::services::palette::EffectiveStyle;
use crate::app::state::KioskState;

use super::theme::{icon_glyph, paint_style, swatch_color};

const COLUMNS: i32 = 2;
const TILE_HEIGHT: i32 = 84;
const TILE_GAP: i32 = 12;
const TILE_PADDING: i32 = 16;
const NAME_FONT_SIZE: i32 = 18;
const PRICE_FONT_SIZE: i32 = 24;

struct Tile {
    item_id: String,
    name: String,
    price: String,
    style: EffectiveStyle,
}

struct ItemsState {
    tiles: Vec<Tile>,
    hover: Option<usize>,
    sender: Sender<Message>,
}

/// Menu items of the active category, laid out as a grid of tiles.
pub struct ItemList {
    pub widget: Widget,
    state: Rc<RefCell<ItemsState>>,
}

impl ItemList {
    pub fn new(sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(ItemsState {
            tiles: Vec::new(),
            hover: None,
            sender,
        }));

        let mut widget = Widget::default();

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_items(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_items(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild(&mut self, kiosk: &KioskState) {
        let mut st = self.state.borrow_mut();
        st.tiles = kiosk
            .catalog()
            .items_in(kiosk.active_category())
            .map(|item| {
                let glyph = icon_glyph(&item.icon);
                Tile {
                    item_id: item.id.clone(),
                    name: if glyph.is_empty() {
                        item.display_name.clone()
                    } else {
                        format!("{} {}", glyph, item.display_name)
                    },
                    price: format!("R$ {}", item.unit_price),
                    style: kiosk.item_style(item),
                }
            })
            .collect();
        if st.hover.is_some_and(|index| index >= st.tiles.len()) {
            st.hover = None;
        }
        drop(st);
        self.widget.redraw();
    }
}

fn tile_rect(wid: &Widget, index: usize) -> (i32, i32, i32, i32) {
    let index = index as i32;
    let width = (wid.w() - TILE_GAP * (COLUMNS - 1)) / COLUMNS;
    let x = wid.x() + (index % COLUMNS) * (width + TILE_GAP);
    let y = wid.y() + (index / COLUMNS) * (TILE_HEIGHT + TILE_GAP);
    (x, y, width, TILE_HEIGHT)
}

fn hit_test(wid: &Widget, count: usize, mx: i32, my: i32) -> Option<usize> {
    (0..count).find(|&index| {
        let (x, y, w, h) = tile_rect(wid, index);
        mx >= x && mx < x + w && my >= y && my < y + h
    })
}

fn draw_items(wid: &Widget, st: &ItemsState) {
    draw::set_draw_color(fltk::enums::Color::White);
    draw::draw_rectf(wid.x(), wid.y(), wid.w(), wid.h());

    for (index, tile) in st.tiles.iter().enumerate() {
        let (x, y, w, h) = tile_rect(wid, index);
        let text = paint_style(x, y, w, h, &tile.style, swatch_color(Swatch::of(Hue::Gray, 800)));

        if st.hover == Some(index) {
            draw::set_draw_color(text);
            draw::draw_rect(x, y, w, h);
        }

        draw::set_draw_color(text);
        draw::set_font(Font::Helvetica, NAME_FONT_SIZE);
        draw::draw_text2(
            &tile.name,
            x + TILE_PADDING,
            y,
            (w - TILE_PADDING * 2) * 2 / 3,
            h,
            Align::Left | Align::Inside | Align::Wrap,
        );
        draw::set_font(Font::HelveticaBold, PRICE_FONT_SIZE);
        draw::draw_text2(
            &tile.price,
            x + TILE_PADDING,
            y,
            w - TILE_PADDING * 2,
            h,
            Align::Right | Align::Inside,
        );
    }
}

fn handle_items(wid: &mut Widget, event: Event, state: &Rc<RefCell<ItemsState>>) -> bool {
    let (mx, my) = (fltk::app::event_x(), fltk::app::event_y());
    match event {
        Event::Push => {
            let st = state.borrow();
            if let Some(index) = hit_test(wid, st.tiles.len(), mx, my) {
                let id = st.tiles[index].item_id.clone();
                let sender = st.sender;
                drop(st);
                sender.send(Message::AddItem(id));
            }
            true
        }
        Event::Enter => true,
        Event::Move => {
            let mut st = state.borrow_mut();
            let hit = hit_test(wid, st.tiles.len(), mx, my);
            if hit != st.hover {
                st.hover = hit;
                let hovered = hit.map(|index| st.tiles[index].item_id.clone());
                let sender = st.sender;
                drop(st);
                if let Some(id) = hovered {
                    sender.send(Message::HoverItem(id));
                }
                wid.redraw();
            }
            true
        }
        Event::Leave => {
            let mut st = state.borrow_mut();
            if st.hover.take().is_some() {
                drop(st);
                wid.redraw();
            }
            false
        }
        _ => false,
    }
}
