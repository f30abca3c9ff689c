/// Returns the event-script guide printed by `feed guide`.
pub fn run() -> &'static str {
    r#"## feed event scripts

`feed play` drives one in-memory feed with a list of events, one per line, read from a
file or from stdin. State lives only for the duration of the run.

### Events

```text
like <post_id>              # Toggle the like on a post
draft <post_id> <text...>   # Replace the comment draft for a post
submit <post_id>            # Post the current draft as a comment, then clear it
comment <post_id> <text...> # Shorthand for draft followed by submit
show                        # Print the whole feed
```

Blank lines and lines starting with `#` are skipped. Everything after the post id is the
text, verbatim.

### Ignored events

Events never fail against the feed. They are reported and skipped when:

- the post id matches no post (a close match is suggested)
- `submit` finds an empty draft

A line with an unknown verb or a missing post id stops the run with an error.

### Example

```bash
printf 'like 1\ncomment 2 nice\nshow\n' | feed play
feed play session.txt --json
feed show --seed my_feed.toml
```

`--seed` (or `FEED_SEED`) points at a TOML file with `[[stories]]` and `[[posts]]` tables;
without it the built-in mock feed is used."#
}
