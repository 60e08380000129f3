/// Projects a slice of entities into their response summaries, keeping the
/// input order.
pub fn list_of_summaries<'a, E, S>(entities: &'a [E]) -> Vec<S>
where
    S: From<&'a E>,
{
    entities.iter().map(S::from).collect()
}
