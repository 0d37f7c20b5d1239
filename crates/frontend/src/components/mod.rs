pub mod drawer;
pub mod map_card;
pub mod panel_view;
pub mod toast;
pub mod topbar;
