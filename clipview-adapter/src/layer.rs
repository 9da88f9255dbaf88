use clipview::Point;

/// The seam to a host compositing layer that displays scrolled content.
///
/// Implementations wrap whatever scrolling surface the host toolkit
/// provides (a `CAScrollLayer`, a GPU quad, a terminal framebuffer region)
/// and reposition its rendered content when asked. They never decide scroll
/// positions themselves.
pub trait ScrollLayer {
    /// Repositions the layer so `offset` becomes the top-left visible
    /// content coordinate.
    fn set_content_offset(&mut self, offset: Point);

    /// Marks the layer's content opaque so compositing can skip blending.
    fn set_opaque(&mut self, opaque: bool);
}

/// Keeps a [`ScrollLayer`]'s displayed content offset synchronized with a
/// logical scroll origin.
///
/// `sync` is side-effect only and suppresses redundant pushes: a frame tick
/// that did not move the origin does not touch the layer.
#[derive(Clone, Debug)]
pub struct LayerBridge<L> {
    layer: L,
    last_offset: Option<Point>,
    last_opaque: Option<bool>,
}

impl<L: ScrollLayer> LayerBridge<L> {
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            last_offset: None,
            last_opaque: None,
        }
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Mutable access to the underlying layer.
    ///
    /// If you reposition the layer directly, call [`Self::invalidate`] so
    /// the next `sync` pushes unconditionally.
    pub fn layer_mut(&mut self) -> &mut L {
        &mut self.layer
    }

    pub fn into_inner(self) -> L {
        self.layer
    }

    /// Forgets the last pushed state; the next `sync`/`set_opaque` pushes
    /// unconditionally.
    pub fn invalidate(&mut self) {
        self.last_offset = None;
        self.last_opaque = None;
    }

    /// Pushes `origin` as the layer's content offset, unless the layer
    /// already shows it.
    pub fn sync(&mut self, origin: Point) {
        if self.last_offset == Some(origin) {
            return;
        }
        self.layer.set_content_offset(origin);
        self.last_offset = Some(origin);
    }

    pub fn set_opaque(&mut self, opaque: bool) {
        if self.last_opaque == Some(opaque) {
            return;
        }
        self.layer.set_opaque(opaque);
        self.last_opaque = Some(opaque);
    }
}
