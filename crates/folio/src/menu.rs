//! Mobile navigation menu and the article table-of-contents drawer.

/// Header menu shown below the mobile breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
    breakpoint_px: u32,
}

impl MobileMenu {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Viewport resized. Wider than the breakpoint means the desktop header
    /// is visible, so the menu closes. Returns whether it changed.
    pub fn on_resize(&mut self, width_px: u32) -> bool {
        if self.open && width_px > self.breakpoint_px {
            self.open = false;
            return true;
        }
        false
    }

    /// Body scrolling is locked while the menu covers the page.
    pub fn locks_body_scroll(&self) -> bool {
        self.open
    }

    /// A menu link was followed; the menu closes before the link resolves.
    pub fn follow_link(&mut self) {
        self.close();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocDrawer {
    open: bool,
}

impl TocDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn pick_section(&mut self) {
        self.open = false;
    }
}
