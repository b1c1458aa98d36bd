use super::Quote;
use crate::period::TimePeriod;

/// The built-in library: fifteen quotes per period.
pub(super) fn builtin() -> Vec<Quote> {
    use TimePeriod::*;
    [
        // Morning
        (Morning, "Thich Nhat Hanh", "Waking up this morning, I smile. Twenty-four brand new hours are before me."),
        (Morning, "Mary Oliver", "It is a serious thing just to be alive on this fresh morning in this broken world."),
        (Morning, "Mary Oliver", "Hello, sun in my face. Hello you who made the morning and spread it over the fields. Watch, now, how I start the day in happiness, in kindness."),
        (Morning, "Thich Nhat Hanh", "The present moment is filled with joy and happiness. If you are attentive, you will see it."),
        (Morning, "Brené Brown", "Owning our story can be hard but not nearly as difficult as spending our lives running from it."),
        (Morning, "Pema Chödrön", "Start where you are. Use what you have. Do what you can."),
        (Morning, "Thich Nhat Hanh", "Because you are alive, everything is possible."),
        (Morning, "Mary Oliver", "Instructions for living a life: Pay attention. Be astonished. Tell about it."),
        (Morning, "Brené Brown", "Vulnerability is the birthplace of love, belonging, joy, courage, empathy, and creativity."),
        (Morning, "Pema Chödrön", "You are the sky. Everything else is just the weather."),
        (Morning, "Thich Nhat Hanh", "Life is available only in the present moment."),
        (Morning, "Mary Oliver", "You do not have to be good. You only have to let the soft animal of your body love what it loves."),
        (Morning, "Brené Brown", "Imperfections are not inadequacies; they are reminders that we're all in this together."),
        (Morning, "Pema Chödrön", "Fear is a natural reaction to moving closer to the truth."),
        (Morning, "Thich Nhat Hanh", "Smile, breathe and go slowly."),

        // Day
        (Day, "Brené Brown", "How much we know ourselves is extremely important but how we treat ourselves is the most important."),
        (Day, "Pema Chödrön", "Nothing ever goes away until it has taught us what we need to know."),
        (Day, "Thich Nhat Hanh", "Breath is the bridge which connects life to consciousness."),
        (Day, "Mary Oliver", "To pay attention, this is our endless and proper work."),
        (Day, "Brené Brown", "Vulnerability sounds like truth and feels like courage."),
        (Day, "Pema Chödrön", "Compassion becomes real when we recognize our shared humanity."),
        (Day, "Thich Nhat Hanh", "The best way to take care of the future is to take care of the present moment."),
        (Day, "Mary Oliver", "Love yourself. Then forget it. Then, love the world."),
        (Day, "Brené Brown", "What we know matters but who we are matters more."),
        (Day, "Pema Chödrön", "Meditation practice isn't about trying to throw ourselves away and become something better. It's about befriending who we are already."),
        (Day, "Thich Nhat Hanh", "When we are mindful, deeply in touch with the present moment, our understanding of what is going on deepens."),
        (Day, "Mary Oliver", "Still, what I want in my life is to be willing to be dazzled."),
        (Day, "Brené Brown", "We cannot selectively numb emotions. When we numb the painful emotions, we also numb the positive emotions."),
        (Day, "Pema Chödrön", "Don't worry about achieving. Don't worry about perfection. Just be there each moment as best you can."),
        (Day, "Thich Nhat Hanh", "Letting go gives us freedom, and freedom is the only condition for happiness."),

        // Evening
        (Evening, "Brené Brown", "The dark does not destroy the light; it defines it. It's our fear of the dark that casts our joy into the shadows."),
        (Evening, "Pema Chödrön", "Things falling apart is a kind of testing and also a kind of healing."),
        (Evening, "Thich Nhat Hanh", "Sometimes your joy is the source of your smile, but sometimes your smile can be the source of your joy."),
        (Evening, "Mary Oliver", "Someone I loved once gave me a box full of darkness. It took me years to understand that this, too, was a gift."),
        (Evening, "Brené Brown", "Authenticity is the daily practice of letting go of who we think we're supposed to be and embracing who we are."),
        (Evening, "Pema Chödrön", "We can let the circumstances of our lives harden us so that we become increasingly resentful and afraid, or we can let them soften us."),
        (Evening, "Thich Nhat Hanh", "Hope is important because it can make the present moment less difficult to bear."),
        (Evening, "Mary Oliver", "Tell me about despair, yours, and I will tell you mine. Meanwhile the world goes on."),
        (Evening, "Brené Brown", "If we can share our story with someone who responds with empathy and understanding, shame can't survive."),
        (Evening, "Pema Chödrön", "When we are willing to stay even a moment with uncomfortable energy, we gradually learn not to fear it."),
        (Evening, "Thich Nhat Hanh", "The seed of suffering in you may be strong, but don't wait until you have no more suffering before allowing yourself to be happy."),
        (Evening, "Mary Oliver", "Have I experienced happiness with sufficient gratitude? Have I been bold enough?"),
        (Evening, "Brené Brown", "Compassion is not a virtue — it is a commitment."),
        (Evening, "Pema Chödrön", "It is healing to know all the ways that you're sneaky, all the ways that you hide out. You can know all of that with some sense of humor and kindness."),
        (Evening, "Thich Nhat Hanh", "People have a hard time letting go of their suffering. Out of a fear of the unknown, they prefer suffering that is familiar."),

        // Night
        (Night, "Mary Oliver", "Sleep comes its little while. Then I wake in the valley of midnight to the first fragrances of spring which is coming, all by itself, no matter what."),
        (Night, "Brené Brown", "True belonging is the spiritual practice of believing in and belonging to yourself so deeply that you can share your most authentic self with the world."),
        (Night, "Pema Chödrön", "Our true nature is like a precious jewel: although it may be temporarily buried in mud, it remains completely brilliant and unaffected."),
        (Night, "Thich Nhat Hanh", "Breathing in, I calm body and mind. Breathing out, I smile. Dwelling in the present moment I know this is the only moment."),
        (Night, "Mary Oliver", "When it's over, I want to say: all my life I was a bride married to amazement."),
        (Night, "Brené Brown", "Only when we are brave enough to explore the darkness will we discover the infinite power of our light."),
        (Night, "Pema Chödrön", "Feelings like disappointment, embarrassment, irritation, resentment, anger, jealousy, and fear are actually very clear moments that teach us where we are holding back."),
        (Night, "Thich Nhat Hanh", "Many people think excitement is happiness. But when you are excited you are not peaceful. True happiness is based on peace."),
        (Night, "Mary Oliver", "The world offers itself to your imagination, calls to you like the wild geese, harsh and exciting—over and over announcing your place in the family of things."),
        (Night, "Brené Brown", "You are imperfect, you are wired for struggle, but you are worthy of love and belonging."),
        (Night, "Pema Chödrön", "The most difficult times for many of us are the ones we give ourselves."),
        (Night, "Thich Nhat Hanh", "In order to heal others, we first need to heal ourselves. And to heal ourselves, we need to know how to deal with ourselves."),
        (Night, "Mary Oliver", "You must not ever stop being whimsical. And you must not, ever, give anyone else the responsibility for your life."),
        (Night, "Brené Brown", "Courage is like a habit, a virtue: You get it by courageous acts. You learn courage by couraging."),
        (Night, "Pema Chödrön", "Deep down in the human spirit, there is a reservoir of courage. It is always available, always waiting to be discovered."),
    ]
    .into_iter()
    .map(|(period, author, text)| Quote::new(text, author, period))
    .collect()
}
