//! How-to-play text printed by `ayo-arena rules`.

/// The rules of Ayo as implemented by the engine.
pub const RULES: &str = "\
How to play Ayo

1. The board has 12 pits. Pits 0-5 belong to side A, pits 6-11 to side B.
2. Each pit starts with 4 seeds. Side A moves first.
3. On your turn, pick one of your non-empty pits. Its seeds are sown one per
   pit into the pits that follow, wrapping from 11 to 0. The pit you emptied
   is skipped if the sowing comes all the way around.
4. If the last seed lands in an opponent's pit that now holds exactly 2 or 3
   seeds, you capture them. Keep walking backward: every preceding opponent
   pit holding 2 or 3 is captured too, until a pit breaks the chain.
5. The game ends as soon as either row is empty. Seeds left on the other row
   go to that row's owner.
6. The side with the most captured seeds wins. Equal totals are a tie.
";
