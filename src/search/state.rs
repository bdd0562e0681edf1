use std::fmt;
use std::rc::Rc;

use crate::board::Board;
use crate::slide::Slide;

/// A node of the search tree: a board, the number of slides taken to reach
/// it, the heuristic estimate of the slides still needed, and a shared link
/// to the state it was generated from.
///
/// States are immutable once built. Many frontier entries can share one
/// ancestor, so parents are reference counted rather than copied.
pub struct SearchState {
    board: Board,
    g: u32,
    h: u32,
    slide: Option<Slide>,
    parent: Option<Rc<SearchState>>,
}

impl SearchState {
    /// The state a search starts from: no parent and a path cost of zero.
    pub fn root(board: Board, h: u32) -> Rc<Self> {
        Rc::new(Self {
            board,
            g: 0,
            h,
            slide: None,
            parent: None,
        })
    }

    /// The state reached from `parent` by applying `slide`, which produced
    /// `board`.
    pub fn child(parent: &Rc<SearchState>, slide: Slide, board: Board, h: u32) -> Rc<Self> {
        Rc::new(Self {
            board,
            g: parent.g + 1,
            h,
            slide: Some(slide),
            parent: Some(Rc::clone(parent)),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        g: u32,
        h: u32,
        slide: Option<Slide>,
        parent: Option<Rc<SearchState>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            board,
            g,
            h,
            slide,
            parent,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Slides taken from the root.
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Estimated slides remaining.
    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    pub fn id(&self) -> u64 {
        self.board.position_id()
    }

    /// The slide that produced this state from its parent.
    pub fn slide(&self) -> Option<Slide> {
        self.slide
    }

    pub fn parent(&self) -> Option<&Rc<SearchState>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

// Unlinks the parent chain one state at a time. The default drop glue would
// recurse once per ancestor, and depth-first paths can be tens of thousands
// of states long.
impl Drop for SearchState {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(state) = parent {
            match Rc::try_unwrap(state) {
                Ok(mut state) => parent = state.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SearchState")
            .field("id", &self.id())
            .field("g", &self.g)
            .field("h", &self.h)
            .field("slide", &self.slide)
            .field("is_root", &self.is_root())
            .finish()
    }
}
