use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    draw,
    enums::{Align, Color, Event, Font},
    prelude::*,
    widget::Widget,
};

use crate::app::domain::catalog::CategoryId;
use crate::app::domain::messages::Message;
use crate::app::domain::swatch::{Hue, Swatch};
use crate::app::services::palette::EffectiveStyle;
use crate::app::state::KioskState;

use super::theme::{icon_glyph, paint_style, swatch_color};

pub const TABS_HEIGHT: i32 = 56;

const TAB_GAP: i32 = 8;
const TAB_H_PADDING: i32 = 24;
const LABEL_FONT_SIZE: i32 = 18;

struct TabInfo {
    id: CategoryId,
    label: String,
    style: EffectiveStyle,
    is_active: bool,
}

struct TabsState {
    tabs: Vec<TabInfo>,
    /// (x offset, width) per tab, relative to the widget.
    layout: Vec<(i32, i32)>,
    hover: Option<usize>,
    sender: Sender<Message>,
}

pub struct CategoryTabs {
    pub widget: Widget,
    state: Rc<RefCell<TabsState>>,
}

impl CategoryTabs {
    pub fn new(x: i32, y: i32, w: i32, sender: Sender<Message>) -> Self {
        let state = Rc::new(RefCell::new(TabsState {
            tabs: Vec::new(),
            layout: Vec::new(),
            hover: None,
            sender,
        }));

        let mut widget = Widget::new(x, y, w, TABS_HEIGHT, None);

        let draw_state = state.clone();
        widget.draw(move |wid| {
            let st = draw_state.borrow();
            draw_tabs(wid, &st);
        });

        let handle_state = state.clone();
        widget.handle(move |wid, event| handle_tabs(wid, event, &handle_state));

        Self { widget, state }
    }

    pub fn rebuild(&mut self, kiosk: &KioskState) {
        let mut st = self.state.borrow_mut();
        st.tabs.clear();
        for category in kiosk.catalog().categories() {
            let glyph = icon_glyph(&category.icon);
            let label = if glyph.is_empty() {
                category.label.clone()
            } else {
                format!("{} {}", glyph, category.label)
            };
            st.tabs.push(TabInfo {
                id: category.id.clone(),
                label,
                style: kiosk.tab_style(&category.id),
                is_active: &category.id == kiosk.active_category(),
            });
        }
        compute_layout(&mut st);
        drop(st);
        self.widget.redraw();
    }
}

fn compute_layout(st: &mut TabsState) {
    draw::set_font(Font::HelveticaBold, LABEL_FONT_SIZE);
    let mut x = 0;
    st.layout = st
        .tabs
        .iter()
        .map(|tab| {
            let (tw, _) = draw::measure(&tab.label, true);
            let width = tw + TAB_H_PADDING * 2;
            let slot = (x, width);
            x += width + TAB_GAP;
            slot
        })
        .collect();
}

fn hit_test(layout: &[(i32, i32)], mx: i32) -> Option<usize> {
    layout.iter().position(|&(x, w)| mx >= x && mx < x + w)
}

fn draw_tabs(wid: &Widget, st: &TabsState) {
    let (wx, wy, ww, wh) = (wid.x(), wid.y(), wid.w(), wid.h());

    draw::set_draw_color(wid.parent().map(|p| p.color()).unwrap_or(Color::White));
    draw::draw_rectf(wx, wy, ww, wh);

    for (index, (tab, &(x, width))) in st.tabs.iter().zip(&st.layout).enumerate() {
        let tx = wx + x;
        // Inactive tabs sit two pixels lower, like a tab strip
        let (ty, th) = if tab.is_active { (wy, wh) } else { (wy + 2, wh - 2) };

        let text_color = if !tab.is_active && st.hover == Some(index) {
            draw::set_draw_color(swatch_color(Swatch::of(Hue::Gray, 600)));
            draw::draw_rectf(tx, ty, width, th);
            Color::White
        } else {
            let base_text = if tab.is_active {
                swatch_color(Swatch::of(Hue::Gray, 900))
            } else {
                Color::White
            };
            paint_style(tx, ty, width, th, &tab.style, base_text)
        };

        draw::set_draw_color(text_color);
        draw::set_font(Font::HelveticaBold, LABEL_FONT_SIZE);
        draw::draw_text2(&tab.label, tx, ty, width, th, Align::Center);
    }
}

fn handle_tabs(wid: &mut Widget, event: Event, state: &Rc<RefCell<TabsState>>) -> bool {
    match event {
        Event::Push => {
            let st = state.borrow();
            let mx = fltk::app::event_x() - wid.x();
            if let Some(index) = hit_test(&st.layout, mx) {
                let id = st.tabs[index].id.clone();
                let sender = st.sender;
                drop(st);
                sender.send(Message::SelectCategory(id));
            }
            true
        }
        // Accept Enter so FLTK keeps sending Move events
        Event::Enter => true,
        Event::Move => {
            let mut st = state.borrow_mut();
            let mx = fltk::app::event_x() - wid.x();
            let hit = hit_test(&st.layout, mx);
            if hit != st.hover {
                st.hover = hit;
                let hovered = hit.map(|index| st.tabs[index].id.clone());
                let sender = st.sender;
                drop(st);
                if let Some(id) = hovered {
                    sender.send(Message::HoverCategory(id));
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
