//! Size policies controlling how widgets grow

/// How a widget competes for space along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SizePolicy {
    /// The size hint is a floor; grows only from leftover space
    Minimum,
    /// Grows to the size hint, then shares leftover space
    #[default]
    Preferred,
    /// Grows to the size hint and no further
    Maximum,
    /// Takes all space left after every hint is satisfied
    Expanding,
}

impl SizePolicy {
    /// Whether the leftover phase may give this widget space
    pub const fn takes_leftover(&self) -> bool {
        matches!(self, SizePolicy::Minimum | SizePolicy::Preferred)
    }

    /// Combine the policies of the widgets sharing a grid track
    ///
    /// Expanding beats Minimum, Minimum beats the rest, and a track is
    /// Maximum only when every member is. An empty track is Preferred.
    pub fn for_track<I: IntoIterator<Item = SizePolicy>>(policies: I) -> SizePolicy {
        let mut any = false;
        let mut any_minimum = false;
        let mut all_maximum = true;
        for policy in policies {
            any = true;
            match policy {
                SizePolicy::Expanding => return SizePolicy::Expanding,
                SizePolicy::Minimum => any_minimum = true,
                SizePolicy::Maximum => {}
                SizePolicy::Preferred => all_maximum = false,
            }
            if policy != SizePolicy::Maximum {
                all_maximum = false;
            }
        }
        if any_minimum {
            SizePolicy::Minimum
        } else if any && all_maximum {
            SizePolicy::Maximum
        } else {
            SizePolicy::Preferred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SizePolicy::*;

    #[test]
    fn test_track_policy() {
        assert_eq!(SizePolicy::for_track([]), Preferred);
        assert_eq!(SizePolicy::for_track([Maximum, Maximum]), Maximum);
        assert_eq!(SizePolicy::for_track([Maximum, Preferred]), Preferred);
        assert_eq!(SizePolicy::for_track([Preferred, Minimum, Maximum]), Minimum);
        assert_eq!(SizePolicy::for_track([Minimum, Expanding]), Expanding);
    }
}
