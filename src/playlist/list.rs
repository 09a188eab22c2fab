// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Doubly linked playlist with a circular "now playing" cursor.
//!
//! Tracks live in an arena and are linked by handles. The cursor is
//! either unset (empty playlist) or bound to a track in the list, and
//! navigation wraps from the tail to the head and back.

use tracing::trace;

use super::arena::{Arena, TrackHandle};
use super::error::{PlaylistError, Result};
use super::track::{Track, TrackId};

/// Ordered, mutable collection of tracks with a cursor
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Node storage
    arena: Arena,
    /// First track
    head: Option<TrackHandle>,
    /// Last track
    tail: Option<TrackHandle>,
    /// Currently selected track
    cursor: Option<TrackHandle>,
    /// Number of linked tracks
    len: usize,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            cursor: None,
            len: 0,
        }
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the playlist holds no tracks
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a track after the last one.
    ///
    /// The first track added to an empty playlist becomes the cursor.
    pub fn append(&mut self, track: Track) -> &Track {
        let handle = self.arena.insert(track);

        match self.tail {
            Some(tail) => {
                self.arena[tail].next = Some(handle);
                self.arena[handle].prev = Some(tail);
            }
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);

        if self.cursor.is_none() {
            self.cursor = Some(handle);
        }
        self.len += 1;

        let track = &self.arena[handle].track;
        trace!(id = %track.id(), len = self.len, "appended track");
        track
    }

    /// Insert a track so it ends up at `position`.
    ///
    /// Valid positions are `0..=len`; `len` behaves exactly like
    /// [`append`](Self::append). Out-of-range positions leave the
    /// playlist untouched.
    pub fn insert_at(&mut self, position: i64, track: Track) -> Result<&Track> {
        let index = usize::try_from(position)
            .ok()
            .filter(|&index| index <= self.len)
            .ok_or(PlaylistError::InvalidPosition {
                position,
                len: self.len,
            })?;

        if index == self.len {
            return Ok(self.append(track));
        }

        // index < len, so a track currently sits at `index`
        let at = self.handle_at(index).ok_or(PlaylistError::InvalidPosition {
            position,
            len: self.len,
        })?;
        let prev = self.arena[at].prev;
        let handle = self.arena.insert(track);

        self.arena[handle].prev = prev;
        self.arena[handle].next = Some(at);
        self.arena[at].prev = Some(handle);
        match prev {
            Some(prev) => self.arena[prev].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.len += 1;

        let track = &self.arena[handle].track;
        trace!(id = %track.id(), index, len = self.len, "inserted track");
        Ok(track)
    }

    /// Find the first track with `id`
    pub fn search_by_id(&self, id: TrackId) -> Option<&Track> {
        self.handle_of(id).map(|handle| &self.arena[handle].track)
    }

    /// Move the cursor forward, wrapping from the last track to the first
    pub fn advance(&mut self) -> Option<&Track> {
        let cursor = self.cursor?;
        self.cursor = self.arena[cursor].next.or(self.head);
        self.current_track()
    }

    /// Move the cursor backward, wrapping from the first track to the last
    pub fn retreat(&mut self) -> Option<&Track> {
        let cursor = self.cursor?;
        self.cursor = self.arena[cursor].prev.or(self.tail);
        self.current_track()
    }

    /// Track under the cursor
    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.map(|handle| &self.arena[handle].track)
    }

    /// Handle of the track under the cursor
    pub fn cursor(&self) -> Option<TrackHandle> {
        self.cursor
    }

    /// Move the cursor to the first track with `id`.
    ///
    /// On a miss the cursor stays where it was.
    pub fn set_cursor_by_id(&mut self, id: TrackId) -> Result<&Track> {
        let handle = self.handle_of(id).ok_or(PlaylistError::NotFound(id))?;
        self.cursor = Some(handle);
        Ok(&self.arena[handle].track)
    }

    /// Copy of every track in playlist order
    pub fn snapshot(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    /// Remove the first track with `id`, returning whether one was found
    pub fn remove_by_id(&mut self, id: TrackId) -> bool {
        match self.handle_of(id) {
            Some(handle) => self.remove(handle).is_some(),
            None => false,
        }
    }

    /// Remove the track behind `handle`.
    ///
    /// If it was under the cursor, the cursor moves to the track that
    /// followed it, or to the new tail when the tail was removed. The
    /// cursor only becomes unset when the playlist empties.
    pub fn remove(&mut self, handle: TrackHandle) -> Option<Track> {
        let node = self.arena.remove(handle)?;
        let (prev, next) = (node.prev, node.next);

        match (prev, next) {
            // Sole track
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // Head
            (None, Some(next)) => {
                self.head = Some(next);
                self.arena[next].prev = None;
            }
            // Tail
            (Some(prev), None) => {
                self.tail = Some(prev);
                self.arena[prev].next = None;
            }
            // Interior
            (Some(prev), Some(next)) => {
                self.arena[prev].next = Some(next);
                self.arena[next].prev = Some(prev);
            }
        }

        if self.cursor == Some(handle) {
            self.cursor = next.or(prev);
        }
        self.len -= 1;
        debug_assert_eq!(self.arena.occupied(), self.len);

        trace!(id = %node.track.id(), len = self.len, "removed track");
        Some(node.track)
    }

    /// Drop every track and unset the cursor
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.cursor = None;
        self.len = 0;
    }

    /// Resolve a handle. Handles of removed tracks resolve to nothing.
    pub fn get(&self, handle: TrackHandle) -> Option<&Track> {
        self.arena.get(handle).map(|node| &node.track)
    }

    /// Handle of the first track with `id`
    pub fn handle_of(&self, id: TrackId) -> Option<TrackHandle> {
        self.handles().find(|&handle| self.arena[handle].track.id() == id)
    }

    /// Zero-based position of the first track with `id`
    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.iter().position(|track| track.id() == id)
    }

    /// First track
    pub fn first(&self) -> Option<&Track> {
        self.head.map(|handle| &self.arena[handle].track)
    }

    /// Last track
    pub fn last(&self) -> Option<&Track> {
        self.tail.map(|handle| &self.arena[handle].track)
    }

    /// Iterate tracks in playlist order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            handles: self.handles(),
        }
    }

    fn handles(&self) -> Handles<'_> {
        Handles {
            arena: &self.arena,
            next: self.head,
            remaining: self.len,
        }
    }

    fn handle_at(&self, index: usize) -> Option<TrackHandle> {
        self.handles().nth(index)
    }
}

/// Walks handles along forward links
struct Handles<'a> {
    arena: &'a Arena,
    next: Option<TrackHandle>,
    remaining: usize,
}

impl Iterator for Handles<'_> {
    type Item = TrackHandle;

    fn next(&mut self) -> Option<TrackHandle> {
        let handle = self.next?;
        self.next = self.arena[handle].next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Borrowing iterator over a playlist's tracks
pub struct Iter<'a> {
    handles: Handles<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<&'a Track> {
        let arena = self.handles.arena;
        self.handles.next().map(|handle| &arena[handle].track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<I: IntoIterator<Item = Track>>(tracks: I) -> Self {
        let mut playlist = Playlist::new();
        for track in tracks {
            playlist.append(track);
        }
        playlist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64, title: &str) -> Track {
        Track::new(id, title, "Artist")
    }

    fn titles(playlist: &Playlist) -> Vec<String> {
        playlist.iter().map(|t| t.title().to_string()).collect()
    }

    fn current_title(playlist: &Playlist) -> Option<String> {
        playlist.current_track().map(|t| t.title().to_string())
    }

    /// Walk both directions and check adjacency, ends and count agree
    fn assert_links(playlist: &Playlist) {
        let forward: Vec<TrackHandle> = playlist.handles().collect();
        assert_eq!(forward.len(), playlist.len());
        assert_eq!(forward.first().copied(), playlist.head);
        assert_eq!(forward.last().copied(), playlist.tail);

        for pair in forward.windows(2) {
            assert_eq!(playlist.arena[pair[0]].next, Some(pair[1]));
            assert_eq!(playlist.arena[pair[1]].prev, Some(pair[0]));
        }
        if let Some(head) = playlist.head {
            assert_eq!(playlist.arena[head].prev, None);
        }
        if let Some(tail) = playlist.tail {
            assert_eq!(playlist.arena[tail].next, None);
        }

        match playlist.cursor {
            Some(cursor) => assert!(forward.contains(&cursor)),
            None => assert!(playlist.is_empty()),
        }
    }

    fn abc() -> Playlist {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "A"));
        playlist.append(track(2, "B"));
        playlist.append(track(3, "C"));
        playlist
    }

    #[test]
    fn test_new_playlist_is_empty() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
        assert!(playlist.current_track().is_none());
        assert!(playlist.snapshot().is_empty());
        assert_links(&playlist);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut playlist = Playlist::new();
        for (i, title) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            let added = playlist.append(track(i as u64, title));
            assert_eq!(added.title(), *title);
        }

        assert_eq!(playlist.len(), 5);
        assert_eq!(titles(&playlist), vec!["A", "B", "C", "D", "E"]);
        assert_links(&playlist);
    }

    #[test]
    fn test_append_to_empty_sets_cursor() {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "A"));
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));

        playlist.append(track(2, "B"));
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
    }

    #[test]
    fn test_insert_at_front() {
        let mut playlist = abc();
        let inserted = playlist.insert_at(0, track(9, "Z")).unwrap();
        assert_eq!(inserted.title(), "Z");

        assert_eq!(titles(&playlist), vec!["Z", "A", "B", "C"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
        assert_links(&playlist);
    }

    #[test]
    fn test_insert_at_front_of_empty_sets_cursor() {
        let mut playlist = Playlist::new();
        playlist.insert_at(0, track(1, "A")).unwrap();

        assert_eq!(titles(&playlist), vec!["A"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
        assert_links(&playlist);
    }

    #[test]
    fn test_insert_at_len_matches_append() {
        let mut inserted = abc();
        inserted.insert_at(3, track(4, "D")).unwrap();

        let mut appended = abc();
        appended.append(track(4, "D"));

        assert_eq!(inserted.snapshot(), appended.snapshot());
        assert_eq!(inserted.current_track(), appended.current_track());
        assert_links(&inserted);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut playlist = abc();
        playlist.insert_at(1, track(8, "X")).unwrap();
        assert_eq!(titles(&playlist), vec!["A", "X", "B", "C"]);

        playlist.insert_at(3, track(9, "Y")).unwrap();
        assert_eq!(titles(&playlist), vec!["A", "X", "B", "Y", "C"]);
        assert_eq!(playlist.len(), 5);
        assert_links(&playlist);
    }

    #[test]
    fn test_insert_at_invalid_position() {
        let mut playlist = abc();
        let before = playlist.snapshot();

        let err = playlist.insert_at(-1, track(9, "Z")).unwrap_err();
        assert_eq!(
            err,
            PlaylistError::InvalidPosition {
                position: -1,
                len: 3
            }
        );

        let err = playlist.insert_at(4, track(9, "Z")).unwrap_err();
        assert_eq!(
            err,
            PlaylistError::InvalidPosition {
                position: 4,
                len: 3
            }
        );

        assert_eq!(playlist.snapshot(), before);
        assert_eq!(playlist.len(), 3);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
        assert_links(&playlist);
    }

    #[test]
    fn test_insert_at_invalid_position_on_empty() {
        let mut playlist = Playlist::new();
        assert!(playlist.insert_at(1, track(1, "A")).is_err());
        assert!(playlist.is_empty());
        assert!(playlist.current_track().is_none());
    }

    #[test]
    fn test_search_by_id() {
        let playlist = abc();
        assert_eq!(playlist.search_by_id(TrackId(2)).unwrap().title(), "B");
        assert!(playlist.search_by_id(TrackId(99)).is_none());
    }

    #[test]
    fn test_search_returns_first_match_for_duplicate_ids() {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "First"));
        playlist.append(track(1, "Second"));

        assert_eq!(playlist.search_by_id(TrackId(1)).unwrap().title(), "First");
        assert!(playlist.remove_by_id(TrackId(1)));
        assert_eq!(titles(&playlist), vec!["Second"]);
    }

    #[test]
    fn test_advance_wraps() {
        let mut playlist = abc();
        assert_eq!(playlist.advance().unwrap().title(), "B");
        assert_eq!(playlist.advance().unwrap().title(), "C");
        assert_eq!(playlist.advance().unwrap().title(), "A");
    }

    #[test]
    fn test_retreat_wraps() {
        let mut playlist = abc();
        assert_eq!(playlist.retreat().unwrap().title(), "C");
        assert_eq!(playlist.retreat().unwrap().title(), "B");
        assert_eq!(playlist.retreat().unwrap().title(), "A");
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let mut playlist = Playlist::new();
        assert!(playlist.advance().is_none());
        assert!(playlist.retreat().is_none());
        assert!(playlist.current_track().is_none());
    }

    #[test]
    fn test_single_track_navigation_stays_put() {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "A"));
        assert_eq!(playlist.advance().unwrap().title(), "A");
        assert_eq!(playlist.retreat().unwrap().title(), "A");
    }

    #[test]
    fn test_advance_len_times_is_identity() {
        let mut playlist = abc();
        playlist.append(track(4, "D"));

        for start in 0..playlist.len() {
            playlist.set_cursor_by_id(TrackId(start as u64 + 1)).unwrap();
            let origin = current_title(&playlist);
            for _ in 0..playlist.len() {
                playlist.advance();
            }
            assert_eq!(current_title(&playlist), origin);
        }
    }

    #[test]
    fn test_retreat_inverts_advance() {
        let mut playlist = abc();
        for id in 1..=3 {
            playlist.set_cursor_by_id(TrackId(id)).unwrap();
            let origin = current_title(&playlist);
            playlist.advance();
            playlist.retreat();
            assert_eq!(current_title(&playlist), origin);
        }
    }

    #[test]
    fn test_set_cursor_by_id() {
        let mut playlist = abc();
        assert_eq!(playlist.set_cursor_by_id(TrackId(3)).unwrap().title(), "C");
        assert_eq!(current_title(&playlist).as_deref(), Some("C"));

        let err = playlist.set_cursor_by_id(TrackId(42)).unwrap_err();
        assert_eq!(err, PlaylistError::NotFound(TrackId(42)));
        assert_eq!(current_title(&playlist).as_deref(), Some("C"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let playlist = abc();
        let mut snapshot = playlist.snapshot();
        snapshot.clear();

        assert_eq!(playlist.len(), 3);
        assert_eq!(titles(&playlist), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_remove_absent_id() {
        let mut playlist = abc();
        let before = playlist.snapshot();

        assert!(!playlist.remove_by_id(TrackId(99)));
        assert_eq!(playlist.snapshot(), before);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
    }

    #[test]
    fn test_remove_sole_track_unsets_cursor() {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "A"));

        assert!(playlist.remove_by_id(TrackId(1)));
        assert!(playlist.is_empty());
        assert!(playlist.current_track().is_none());
        assert!(playlist.first().is_none());
        assert!(playlist.last().is_none());
        assert_links(&playlist);
    }

    #[test]
    fn test_remove_head() {
        let mut playlist = abc();
        assert!(playlist.remove_by_id(TrackId(1)));

        assert_eq!(titles(&playlist), vec!["B", "C"]);
        assert_eq!(playlist.first().unwrap().title(), "B");
        // Cursor was on A and moves forward
        assert_eq!(current_title(&playlist).as_deref(), Some("B"));
        assert_links(&playlist);
    }

    #[test]
    fn test_remove_tail_under_cursor_moves_to_new_tail() {
        let mut playlist = abc();
        playlist.set_cursor_by_id(TrackId(3)).unwrap();

        assert!(playlist.remove_by_id(TrackId(3)));
        assert_eq!(titles(&playlist), vec!["A", "B"]);
        assert_eq!(playlist.last().unwrap().title(), "B");
        assert_eq!(current_title(&playlist).as_deref(), Some("B"));
        assert_links(&playlist);
    }

    #[test]
    fn test_remove_interior_under_cursor_moves_forward() {
        let mut playlist = abc();
        playlist.set_cursor_by_id(TrackId(2)).unwrap();

        assert!(playlist.remove_by_id(TrackId(2)));
        assert_eq!(titles(&playlist), vec!["A", "C"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("C"));
        assert_links(&playlist);
    }

    #[test]
    fn test_remove_elsewhere_keeps_cursor() {
        let mut playlist = abc();
        playlist.set_cursor_by_id(TrackId(3)).unwrap();

        assert!(playlist.remove_by_id(TrackId(1)));
        assert_eq!(current_title(&playlist).as_deref(), Some("C"));
        assert!(playlist.remove_by_id(TrackId(2)));
        assert_eq!(current_title(&playlist).as_deref(), Some("C"));
        assert_links(&playlist);
    }

    #[test]
    fn test_append_then_remove_round_trip() {
        let mut playlist = Playlist::new();
        playlist.append(track(1, "A"));
        assert!(playlist.remove_by_id(TrackId(1)));

        assert!(playlist.snapshot().is_empty());
        assert!(playlist.current_track().is_none());
        assert_eq!(playlist.len(), 0);

        playlist.append(track(2, "B"));
        assert_eq!(current_title(&playlist).as_deref(), Some("B"));
        assert_links(&playlist);
    }

    #[test]
    fn test_stale_handle_after_remove() {
        let mut playlist = abc();
        let handle = playlist.handle_of(TrackId(2)).unwrap();
        assert_eq!(playlist.get(handle).unwrap().title(), "B");

        assert_eq!(playlist.remove(handle).unwrap().title(), "B");
        assert!(playlist.get(handle).is_none());
        assert!(playlist.remove(handle).is_none());

        playlist.append(track(4, "D"));
        assert!(playlist.get(handle).is_none());
        assert_links(&playlist);
    }

    #[test]
    fn test_position_of() {
        let playlist = abc();
        assert_eq!(playlist.position_of(TrackId(1)), Some(0));
        assert_eq!(playlist.position_of(TrackId(3)), Some(2));
        assert_eq!(playlist.position_of(TrackId(7)), None);
    }

    #[test]
    fn test_clear() {
        let mut playlist = abc();
        let handle = playlist.handle_of(TrackId(1)).unwrap();
        playlist.clear();

        assert!(playlist.is_empty());
        assert!(playlist.current_track().is_none());
        assert!(playlist.get(handle).is_none());
        assert_links(&playlist);

        playlist.append(track(5, "E"));
        assert_eq!(current_title(&playlist).as_deref(), Some("E"));
    }

    #[test]
    fn test_from_iterator() {
        let playlist: Playlist = vec![track(1, "A"), track(2, "B")].into_iter().collect();
        assert_eq!(titles(&playlist), vec!["A", "B"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));

        let mut count = 0;
        for _ in &playlist {
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_full_scenario() {
        let mut playlist = abc();
        assert_eq!(titles(&playlist), vec!["A", "B", "C"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));

        assert_eq!(playlist.advance().unwrap().title(), "B");
        assert_eq!(playlist.advance().unwrap().title(), "C");
        assert_eq!(playlist.advance().unwrap().title(), "A");

        assert!(playlist.remove_by_id(TrackId(2)));
        assert_eq!(titles(&playlist), vec!["A", "C"]);
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));

        playlist.set_cursor_by_id(TrackId(3)).unwrap();
        assert!(playlist.remove_by_id(TrackId(3)));
        assert_eq!(current_title(&playlist).as_deref(), Some("A"));
        assert_eq!(titles(&playlist), vec!["A"]);
        assert_links(&playlist);
    }
}
